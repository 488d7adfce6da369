use crate::core_reply::Reply;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANNOUNCED_SIZE: Regex = Regex::new(r"\((\d+) bytes\)").unwrap();
}

/// Size announced in a reply such as
/// `150 Opening BINARY mode data connection for f (1234 bytes).`
pub fn parse_announced_size(reply: &Reply) -> Option<u64> {
    reply
        .lines()
        .iter()
        .rev()
        .find_map(|line| ANNOUNCED_SIZE.captures(line))
        .and_then(|captures| captures[1].parse().ok())
}
