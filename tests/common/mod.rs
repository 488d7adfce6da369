// A minimal in-process FTP server for driving the client end to end.
#![allow(dead_code)]

use rouilleftp::config::Config;
use rouilleftp::console::RecordingConsole;
use rouilleftp::core_ftpcommand::Dispatcher;
use rouilleftp::session::Session;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};

#[derive(Default)]
pub struct MockState {
    /// Every command line received, without CRLF.
    pub commands: Vec<String>,
    /// Peer addresses of accepted active-mode data connections.
    pub active_peers: Vec<SocketAddr>,
    pub files: HashMap<String, Vec<u8>>,
    pub uploads: HashMap<String, Vec<u8>>,
    pub listing: String,
    /// Sent verbatim instead of a real 227 reply.
    pub pasv_reply: Option<String>,
    /// Answer LIST with a single 2xx and no completion reply.
    pub bare_listing_reply: bool,
}

pub struct MockServer {
    pub addr: SocketAddr,
    /// Where the server accepts active-mode data connections.
    pub data_port: u16,
    pub state: Arc<Mutex<MockState>>,
}

impl MockServer {
    pub async fn start(state: MockState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let data_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let data_port = data_listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(state));

        let shared = state.clone();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            serve(socket, data_listener, shared).await;
        });

        Self {
            addr,
            data_port,
            state,
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.state.lock().unwrap().commands.clone()
    }

    /// A config pointing at this server.
    pub fn config(&self, passive: bool) -> Config {
        let mut config = Config::default();
        config.client.port = self.addr.port();
        config.client.passive = passive;
        config.client.active_data_port = Some(self.data_port);
        config.client.read_timeout_secs = Some(10);
        config
    }

    /// Connects without reading the greeting.
    pub async fn connect(&self, config: Config) -> (Dispatcher, RecordingConsole) {
        let session = Session::connect("127.0.0.1", &config.client).await.unwrap();
        let console = RecordingConsole::new();
        let dispatcher = Dispatcher::new(session, Arc::new(config), Box::new(console.clone()));
        (dispatcher, console)
    }

    /// Connects and consumes the greeting.
    pub async fn dispatcher(&self, config: Config) -> (Dispatcher, RecordingConsole) {
        let (mut dispatcher, console) = self.connect(config).await;
        dispatcher.read_welcome().await.unwrap();
        (dispatcher, console)
    }
}

async fn reply(writer: &mut OwnedWriteHalf, line: &str) {
    writer.write_all(format!("{}\r\n", line).as_bytes()).await.unwrap();
}

async fn serve(socket: TcpStream, data_listener: TcpListener, state: Arc<Mutex<MockState>>) {
    let (rd, mut wr) = socket.into_split();
    let mut lines = BufReader::new(rd).lines();
    let mut passive: Option<TcpListener> = None;

    reply(&mut wr, "220 Mock FTP server ready.").await;

    while let Ok(Some(line)) = lines.next_line().await {
        state.lock().unwrap().commands.push(line.clone());
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb.to_ascii_uppercase(), arg.to_string()),
            None => (line.to_ascii_uppercase(), String::new()),
        };

        match verb.as_str() {
            "USER" => reply(&mut wr, "331 Please specify the password.").await,
            "PASS" => reply(&mut wr, "230 Login successful.").await,
            "SYST" => reply(&mut wr, "215 UNIX Type: L8").await,
            "TYPE" => reply(&mut wr, &format!("200 Switching to {} mode.", arg)).await,
            "CWD" => reply(&mut wr, "250 Directory successfully changed.").await,
            "CDUP" => reply(&mut wr, "250 Directory successfully changed.").await,
            "PWD" => reply(&mut wr, "257 \"/pub\" is the current directory").await,
            "PORT" => reply(&mut wr, "200 PORT command successful.").await,
            "PASV" => {
                let custom = state.lock().unwrap().pasv_reply.clone();
                match custom {
                    Some(text) => reply(&mut wr, &text).await,
                    None => {
                        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                        let port = listener.local_addr().unwrap().port();
                        passive = Some(listener);
                        reply(
                            &mut wr,
                            &format!(
                                "227 Entering Passive Mode (127,0,0,1,{},{}).",
                                port / 256,
                                port % 256
                            ),
                        )
                        .await;
                    }
                }
            }
            "LIST" | "RETR" | "APPE" | "STOR" => {
                // The client connects before it sends the transfer command.
                let mut data = match passive.take() {
                    Some(listener) => listener.accept().await.unwrap().0,
                    None => {
                        let (stream, peer) = data_listener.accept().await.unwrap();
                        state.lock().unwrap().active_peers.push(peer);
                        stream
                    }
                };

                match verb.as_str() {
                    "LIST" => {
                        let (listing, bare) = {
                            let state = state.lock().unwrap();
                            (state.listing.clone(), state.bare_listing_reply)
                        };
                        if bare {
                            reply(&mut wr, "226 Listing sent on the data connection.").await;
                            data.write_all(listing.as_bytes()).await.unwrap();
                            drop(data);
                        } else {
                            reply(&mut wr, "150 Here comes the directory listing.").await;
                            data.write_all(listing.as_bytes()).await.unwrap();
                            drop(data);
                            reply(&mut wr, "226 Directory send OK.").await;
                        }
                    }
                    "RETR" => {
                        let file = state.lock().unwrap().files.get(&arg).cloned();
                        match file {
                            Some(content) => {
                                reply(
                                    &mut wr,
                                    &format!(
                                        "150 Opening BINARY mode data connection for {} ({} bytes).",
                                        arg,
                                        content.len()
                                    ),
                                )
                                .await;
                                data.write_all(&content).await.unwrap();
                                drop(data);
                                reply(&mut wr, "226 Transfer complete.").await;
                            }
                            None => {
                                drop(data);
                                reply(&mut wr, "550 Failed to open file.").await;
                            }
                        }
                    }
                    _ => {
                        reply(&mut wr, "150 Ok to send data.").await;
                        let mut received = Vec::new();
                        data.read_to_end(&mut received).await.unwrap();
                        state.lock().unwrap().uploads.insert(arg.clone(), received);
                        reply(&mut wr, "226 Transfer complete.").await;
                    }
                }
            }
            "QUIT" => {
                reply(&mut wr, "221 Goodbye.").await;
                break;
            }
            _ => reply(&mut wr, "502 Command not implemented.").await,
        }
    }
}
