// Reply parser tests

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::console::RecordingConsole;
    use crate::core_error::ProtocolError;
    use std::time::Duration;

    fn reader(input: &'static [u8]) -> ReplyReader<&'static [u8]> {
        ReplyReader::new(input, None)
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("200 OK").unwrap(), (200, false));
        assert_eq!(parse_line("150-a").unwrap(), (150, true));
        assert_eq!(parse_line("226").unwrap(), (226, false));
        assert!(matches!(parse_line(""), Err(ProtocolError::MalformedReply(_))));
        assert!(matches!(parse_line("OK"), Err(ProtocolError::MalformedReply(_))));
        assert!(matches!(parse_line("20 OK"), Err(ProtocolError::MalformedReply(_))));
        assert!(matches!(parse_line("2000 OK"), Err(ProtocolError::MalformedReply(_))));
    }

    #[test]
    fn test_builder_waits_for_final_line() {
        let mut builder = ReplyBuilder::new();
        assert!(!builder.feed_line("230-Welcome").unwrap());
        assert_eq!(builder.open_code(), Some(230));
        assert!(builder.feed_line("230 Login successful.").unwrap());
        assert_eq!(builder.open_code(), None);
        let reply = builder.finish().unwrap();
        assert_eq!(reply.code(), 230);
        assert_eq!(reply.message(), "Login successful.");
    }

    #[test]
    fn test_unfinished_builder_has_no_reply() {
        let mut builder = ReplyBuilder::new();
        builder.feed_line("220-Hi").unwrap();
        assert!(builder.finish().is_none());
    }

    #[tokio::test]
    async fn test_single_line_reply() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"200 OK\r\n");
        let reply = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(reply.code(), 200);
        assert_eq!(reply.lines(), ["200 OK"]);
        assert!(reply.is_positive());
        assert_eq!(console.lines(), vec!["200 OK"]);
    }

    #[tokio::test]
    async fn test_multi_line_reply_is_one_unit() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"150-a\r\n150-b\r\n150 c\r\n200 next\r\n");
        let reply = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(reply.code(), 150);
        assert_eq!(reply.lines(), ["150-a", "150-b", "150 c"]);
        assert!(reply.is_preliminary());

        // The following reply is still in the stream, untouched.
        let next = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(next.code(), 200);
        assert_eq!(console.lines().len(), 4);
    }

    #[tokio::test]
    async fn test_bare_lf_line_endings() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"220-Hi\n220 Sample banner comes\n");
        let reply = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(reply.code(), 220);
        assert_eq!(reply.lines().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_line_is_reported_and_displayed() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"230-Welcome\r\nno code here\r\n230 done\r\n");
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedReply(ref line) if line == "no code here"));
        assert!(console.contains("no code here"));
    }

    #[tokio::test]
    async fn test_malformed_multi_line_reply_is_drained() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(
            b"230-Welcome\r\nno code here\r\n230-more\r\n230 done\r\n257 \"/pub\"\r\n",
        );
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedReply(_)));
        assert!(console.contains("230 done"));

        let next = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(next.code(), 257);
        assert_eq!(next.lines(), ["257 \"/pub\""]);
    }

    #[tokio::test]
    async fn test_malformed_single_line_reads_nothing_more() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"garbage\r\n200 OK\r\n");
        assert!(reader.read_reply(&mut console).await.is_err());
        let next = reader.read_reply(&mut console).await.unwrap();
        assert_eq!(next.code(), 200);
    }

    #[tokio::test]
    async fn test_stream_ends_while_draining() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"211-Features\r\n bad\r\n");
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::ConnectionLost(_)));
    }

    #[tokio::test]
    async fn test_empty_line_is_malformed() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"\r\n");
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn test_end_of_stream_is_connection_lost() {
        let mut console = RecordingConsole::new();
        let mut reader = reader(b"150-partial\r\n");
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::ConnectionLost(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_timeout() {
        let (client, _server) = tokio::io::duplex(64);
        let mut reader = ReplyReader::new(
            tokio::io::BufReader::new(client),
            Some(Duration::from_secs(5)),
        );
        let mut console = RecordingConsole::new();
        let err = reader.read_reply(&mut console).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Timeout));
    }
}
