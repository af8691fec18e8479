use super::POLL_PATH;

fn base_join(base: &str, path: &str) -> String {
    let b = base.trim_end_matches('/');
    let p = path.trim_start_matches('/');
    format!("{}/{}", b, p)
}

pub fn poll(base: &str) -> String {
    base_join(base, POLL_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_url_tolerates_trailing_slash() {
        assert_eq!(poll("http://host:5000"), "http://host:5000/poll");
        assert_eq!(poll("http://host:5000/"), "http://host:5000/poll");
        assert_eq!(poll("http://host/app/"), "http://host/app/poll");
    }
}
