pub const SHARE_SUBJECT: &str = "TradePro Market Analysis";
pub const SHARE_BODY: &str = "Check out the latest market analysis from TradePro!";

/// A `mailto:` link with no recipient, so the mail client asks for one.
pub fn mailto_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_is_percent_encoded() {
        assert_eq!(
            mailto_link(SHARE_SUBJECT, SHARE_BODY),
            "mailto:?subject=TradePro%20Market%20Analysis\
             &body=Check%20out%20the%20latest%20market%20analysis%20from%20TradePro%21"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(mailto_link("a&b", "x=y?"), "mailto:?subject=a%26b&body=x%3Dy%3F");
    }
}
