use chrono::{DateTime, Utc};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const REFERRERS: [(&str, u8); 3] = [
    ("-", 60),
    ("https://example.com/", 20),
    ("https://search.example/?q=logs", 10),
];
const AGENTS: [(&str, u8); 5] = [
    ("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0", 30),
    ("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/126.0", 40),
    ("curl/8.5.0", 10),
    ("Googlebot/2.1 (+http://www.google.com/bot.html)", 5),
    ("-", 5),
];

pub fn generate_access_line<R: Rng + ?Sized>(rng: &mut R, moment: DateTime<Utc>) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = moment.format("%d/%b/%Y:%H:%M:%S %z");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..2000);
    let referrer = REFERRERS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!(
        "{ip} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size} \"{referrer}\" \"{agent}\""
    )
}
