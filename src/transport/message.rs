/// Escape the characters the gateway treats specially inside `msg`.
///
/// The gateway decodes the message field a second time, so `%` and `&` are escaped
/// before the regular query encoding. `%` must be replaced first, otherwise the `%`
/// introduced by `%26` would be escaped again.
pub fn sanitize_message(message: &str) -> String {
    message.replace('%', "%25").replace('&', "%26")
}

#[cfg(test)]
mod tests {
    use super::sanitize_message;

    #[test]
    fn escapes_percent_and_ampersand() {
        assert_eq!(sanitize_message("50% off"), "50%25 off");
        assert_eq!(sanitize_message("tom & jerry"), "tom %26 jerry");
    }

    #[test]
    fn escapes_percent_before_ampersand() {
        assert_eq!(sanitize_message("%&"), "%25%26");
        assert_eq!(sanitize_message("&%"), "%26%25");
        assert_eq!(sanitize_message("%26"), "%2526");
    }

    #[test]
    fn leaves_other_text_untouched() {
        assert_eq!(sanitize_message("Your code is 1234"), "Your code is 1234");
        assert_eq!(sanitize_message("مرحبا = +?#"), "مرحبا = +?#");
        assert_eq!(sanitize_message(""), "");
    }
}
