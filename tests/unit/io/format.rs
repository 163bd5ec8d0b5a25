//! Tests for the persisted occupancy text codec

#[cfg(test)]
mod tests {
    use occugrid::io::format::{
        parse_flag, parse_occupancy, read_occupancy, write_flags, write_header, write_occupancy,
    };
    use occugrid::{GridError, HalfExtents, Occupancy};
    use std::io::{self, Read};

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    fn malformed_token(text: &str) -> Option<usize> {
        match parse_occupancy(text) {
            Err(GridError::MalformedInput { token, .. }) => Some(token),
            _ => None,
        }
    }

    fn written(write: impl FnOnce(&mut Vec<u8>) -> occugrid::Result<()>) -> String {
        let mut out = Vec::new();
        assert!(write(&mut out).is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    // Tests the header puts each half-extent on its own line
    // Verified by separating header values with spaces
    #[test]
    fn test_write_header() {
        let extents = HalfExtents::new(3, 0, 12).unwrap_or(HalfExtents::ZERO);
        assert_eq!(written(|w| write_header(w, extents)), "3\n0\n12\n");
    }

    // Tests every flag is followed by a space with no line breaks
    // Verified by joining flags without the trailing space
    #[test]
    fn test_write_flags() {
        assert_eq!(
            written(|w| write_flags(w, [true, false, false, true])),
            "1 0 0 1 "
        );
        assert_eq!(written(|w| write_flags(w, [false; 0])), "");
    }

    // Tests a snapshot is written header first, then flags in traversal order
    // Verified by writing flags before the header
    #[test]
    fn test_write_occupancy() {
        let extents = HalfExtents::new(0, 1, 0).unwrap_or(HalfExtents::ZERO);
        let mut occupancy = Occupancy::all_blocked(extents);
        occupancy.set_blocked([0, 1, 0], false);
        assert_eq!(
            written(|w| write_occupancy(w, &occupancy)),
            "0\n1\n0\n1 1 0 "
        );
    }

    // Tests accepted boolean spellings
    // Verified by accepting any non-zero integer as true
    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("2"), None);
        assert_eq!(parse_flag("TRUE"), None);
        assert_eq!(parse_flag(""), None);
    }

    // Tests a well-formed stream yields the matching snapshot
    // Verified by reading flags in storage order
    #[test]
    fn test_parse_occupancy() {
        let occupancy = parse_occupancy("1\n1\n0\n1 1 1 1 1 1 0 1 1 ");
        assert!(occupancy.as_ref().is_ok_and(|o| o.len() == 9));
        assert!(occupancy.as_ref().is_ok_and(|o| o.free_count() == 1));
        assert_eq!(
            occupancy.ok().and_then(|o| o.is_blocked([1, -1, 0])),
            Some(false)
        );
    }

    // Tests trailing tokens after the field are ignored
    // Verified by rejecting unread tokens
    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let occupancy = parse_occupancy("0 0 0 0 extra 1 2 3");
        assert!(occupancy.is_ok_and(|o| o.free_count() == 1));
    }

    // Tests header failures report the offending token
    // Verified by reporting every header failure at token 0
    #[test]
    fn test_malformed_header() {
        assert_eq!(malformed_token(""), Some(0));
        assert_eq!(malformed_token("   \n "), Some(0));
        assert_eq!(malformed_token("1 1"), Some(2));
        assert_eq!(malformed_token("one 1 1"), Some(0));
        assert_eq!(malformed_token("1 -4 1"), Some(1));
        assert_eq!(malformed_token("1 1 100000"), Some(2));
        assert_eq!(malformed_token("1 1 99999999999999999999"), Some(2));
    }

    // Tests flag failures report the offending token
    // Verified by skipping unrecognised flags
    #[test]
    fn test_malformed_flags() {
        assert_eq!(malformed_token("0 0 0"), Some(3));
        assert_eq!(malformed_token("1 0 0 1 1"), Some(5));
        assert_eq!(malformed_token("1 0 0 1 yes 1"), Some(4));

        let message = parse_occupancy("1 0 0 1").err().map(|e| e.to_string());
        assert!(message.is_some_and(|m| m.contains("1 of 3")));
    }

    // Tests reader failures surface as stream errors with their source
    // Verified by mapping read failures to malformed input
    #[test]
    fn test_read_failure() {
        let result = read_occupancy(FailingReader);
        assert!(matches!(result, Err(GridError::Io { .. })));
    }

    // Tests reading from any byte stream
    // Verified by requiring a trailing space after the last flag
    #[test]
    fn test_read_occupancy_from_bytes() {
        let result = read_occupancy("0\n0\n0\n0".as_bytes());
        assert!(result.is_ok_and(|o| o.extents() == HalfExtents::ZERO && o.free_count() == 1));
    }
}
