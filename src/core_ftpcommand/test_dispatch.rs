// Dispatcher tests for commands that never reach the server

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::console::RecordingConsole;
    use crate::core_error::ClientError;
    use crate::core_ftpcommand::{Dispatcher, Flow};
    use crate::core_network::ControlChannel;
    use crate::session::{Session, TransferMode};
    use std::sync::Arc;
    use tokio::io::AsyncReadExt;
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// A server that only records what it receives.
    async fn silent_server() -> (Dispatcher, RecordingConsole, JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let config = Config::default();
        let stream = TcpStream::connect(addr).await.unwrap();
        let control = ControlChannel::new(stream, None).unwrap();
        let session = Session::new(control, &config.client);
        let console = RecordingConsole::new();
        let dispatcher = Dispatcher::new(session, Arc::new(config), Box::new(console.clone()));
        (dispatcher, console, server)
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let (mut dispatcher, console, server) = silent_server().await;
        assert_eq!(dispatcher.execute("ls -l").await.unwrap(), Flow::Continue);
        assert_eq!(console.lines(), vec!["Invalid command".to_string()]);

        drop(dispatcher);
        assert!(server.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let (mut dispatcher, console, server) = silent_server().await;
        assert_eq!(dispatcher.execute("").await.unwrap(), Flow::Continue);
        assert_eq!(dispatcher.execute("   \t").await.unwrap(), Flow::Continue);
        assert!(console.lines().is_empty());

        drop(dispatcher);
        assert!(server.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_operand_count_sends_nothing() {
        let (mut dispatcher, _console, server) = silent_server().await;

        for input in ["cd", "cd a b", "get", "put x y", "user"] {
            let err = dispatcher.execute(input).await.unwrap_err();
            assert!(matches!(err, ClientError::Usage(_)), "{}", input);
            assert!(!err.ends_session());
        }
        let err = dispatcher.execute("CD").await.unwrap_err();
        assert_eq!(err.to_display_message(), "Usage: cd <path>");

        drop(dispatcher);
        assert!(server.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_toggles() {
        let (mut dispatcher, console, server) = silent_server().await;
        assert_eq!(dispatcher.session().state.mode, TransferMode::Active);

        dispatcher.execute("debug").await.unwrap();
        dispatcher.execute("debug").await.unwrap();
        dispatcher.execute("passive").await.unwrap();
        assert_eq!(dispatcher.session().state.mode, TransferMode::Passive);
        dispatcher.execute("PASSIVE").await.unwrap();
        assert_eq!(dispatcher.session().state.mode, TransferMode::Active);

        assert_eq!(
            console.lines(),
            vec![
                "Debugging on (debug=1).",
                "Debugging off (debug=0).",
                "Passive mode on.",
                "Passive mode off.",
            ]
        );

        drop(dispatcher);
        assert!(server.await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let (mut dispatcher, console, _server) = silent_server().await;
        dispatcher.execute("help").await.unwrap();
        let lines = console.lines();
        assert_eq!(lines.len(), 13);
        assert!(console.contains("get path"));
        assert!(lines.iter().all(|line| line.contains("-->")));
    }

    #[tokio::test]
    async fn test_get_rejects_directory_names_locally() {
        let (mut dispatcher, _console, server) = silent_server().await;
        let err = dispatcher.execute("get /pub/..").await.unwrap_err();
        assert!(matches!(err, ClientError::Usage(_)));

        drop(dispatcher);
        assert!(server.await.unwrap().is_empty());
    }
}
