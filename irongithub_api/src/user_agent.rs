/// GitHub rejects requests without a `User-Agent`, so every request identifies
/// this crate and its version.
pub fn get_user_agent() -> String {
    format!("irongithub/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_includes_crate_version() {
        let ua = get_user_agent();
        assert!(ua.starts_with("irongithub/"));
        assert!(ua.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
