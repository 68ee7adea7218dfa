use crate::adapters::LinkProbe;
use tracing::debug;
use url::Url;

/// Statuses counted as a reachable link (2xx and 3xx)
pub fn is_reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Check that a URL points at something reachable
///
/// Only `http://` and `https://` URLs are probed; anything else is `false`
/// without touching the network. Probe failures are `false` too.
pub async fn is_link_valid<P>(probe: &P, url: &str) -> bool
where
    P: LinkProbe + ?Sized,
{
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        debug!(%url, "Rejecting unparsable link");
        return false;
    };

    match probe.head(parsed).await {
        Ok(status) => is_reachable_status(status),
        Err(err) => {
            debug!(?err, %url, "Link probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(199, false)]
    #[case(200, true)]
    #[case(204, true)]
    #[case(301, true)]
    #[case(399, true)]
    #[case(404, false)]
    #[case(500, false)]
    fn test_is_reachable_status(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(is_reachable_status(status), expected);
    }
}
