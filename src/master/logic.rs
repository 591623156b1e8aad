use crate::master::types::Master;
use crate::protocol::{self, Envelope, TAG_RESULT};
use futures_util::{SinkExt, StreamExt};
use log::{debug, info};
use std::error::Error;
use std::path::Path;
use tokio::net::{TcpListener, TcpStream};
use tokio::process::{Child, Command};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};

impl Master {
    /// Spawns the single worker, hands it the range and waits for the sum.
    ///
    /// The three stdout lines printed here (spawn notice, range-sent notice,
    /// received-sum notice) are the observable contract of the master;
    /// everything else goes through the logger.
    pub async fn run(&self) -> Result<(), Box<dyn Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        info!("master listening on {}", addr);

        let exe = std::env::current_exe()?;
        let mut child = spawn_worker(&exe, &addr.to_string())
            .map_err(|e| format!("could not launch worker {}: {}", exe.display(), e))?;
        println!(
            "master: worker spawned with pid {}",
            child.id().unwrap_or(0)
        );

        let (tcp, peer) = listener.accept().await?;
        debug!("worker dialed in from {}", peer);
        let mut stream = accept_async(tcp).await?;

        let assignment = serde_json::to_string(&protocol::pack_range(self.start, self.end))?;
        stream.send(Message::Text(assignment.into())).await?;
        println!("master: range sent [{}, {}]", self.start, self.end);

        let sum = recv_sum(&mut stream).await?;
        println!("master: sum received = {}", sum);

        let _ = stream.close(None).await;
        let _ = child.wait().await;
        Ok(())
    }
}

/// Launches the worker half of this same executable, pointed back at the
/// master's listener address.
fn spawn_worker(program: &Path, master_addr: &str) -> std::io::Result<Child> {
    Command::new(program)
        .arg("--worker")
        .arg(master_addr)
        .spawn()
}

/// Blocks until the worker reports its sum. There is no timeout; anything
/// that is not a well-formed result envelope is skipped.
async fn recv_sum(stream: &mut WebSocketStream<TcpStream>) -> Result<i64, Box<dyn Error>> {
    loop {
        let Some(msg) = stream.next().await else {
            return Err("worker went away without reporting a sum".into());
        };
        match msg? {
            Message::Text(text) => match serde_json::from_str::<Envelope>(&text) {
                Ok(envelope) if envelope.tag == TAG_RESULT => {
                    return Ok(protocol::unpack_sum(&envelope)?)
                }
                Ok(envelope) => debug!("skipping message with tag {}", envelope.tag),
                Err(e) => debug!("skipping unparseable message: {}", e),
            },
            Message::Close(_) => {
                return Err("worker closed the connection without reporting a sum".into())
            }
            _ => {} // ignore ping/pong/binary frames
        }
    }
}
