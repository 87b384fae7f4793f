//! Feeds server lines from the configured source through a
//! [`CookieMonster`].

use std::io::Write;

use bytes::BytesMut;
use fibs_cookie::{CookieMonster, LineCodec};
use futures_util::StreamExt;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Encoder, FramedRead};
use tracing::{info, trace};

use crate::config::{ConfigError, InputConfig, LoginConfig, Source};
use crate::error::SessionError;
use crate::tally::Tally;

/// Opens the configured source and classifies it to the end.
pub async fn run<W: Write>(
    input: &InputConfig,
    echo: bool,
    out: &mut W,
) -> Result<Tally, SessionError> {
    match input.source {
        Source::Stdin => classify_stream(tokio::io::stdin(), input.max_line_len, echo, out).await,
        Source::File => {
            let path = input.path.as_deref().ok_or(ConfigError::MissingInputPath)?;
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| SessionError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
            classify_stream(file, input.max_line_len, echo, out).await
        }
        Source::Tcp => {
            let stream = TcpStream::connect(&input.address)
                .await
                .map_err(|source| SessionError::Connect {
                    address: input.address.clone(),
                    source,
                })?;
            info!(address = %input.address, "Connected");

            // The write half stays open until the server hangs up.
            let (reader, mut writer) = stream.into_split();
            if let Some(login) = &input.login {
                send_login(&mut writer, login).await?;
            }
            classify_stream(reader, input.max_line_len, echo, out).await
        }
    }
}

/// Classifies every line of `reader` with a fresh engine.
///
/// The engine is reset before the first line and released afterwards,
/// whether or not the stream ended cleanly.
pub async fn classify_stream<R, W>(
    reader: R,
    max_line_len: usize,
    echo: bool,
    out: &mut W,
) -> Result<Tally, SessionError>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut monster = CookieMonster::new();
    monster.reset()?;

    let mut lines = LineCodec::with_max_len(max_line_len).framed(reader);
    let result = drain(&mut monster, &mut lines, echo, out).await;
    monster.release();
    result
}

async fn drain<R, W>(
    monster: &mut CookieMonster,
    lines: &mut FramedRead<R, LineCodec>,
    echo: bool,
    out: &mut W,
) -> Result<Tally, SessionError>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut tally = Tally::default();
    while let Some(line) = lines.next().await {
        let line = line?;
        let cookie = monster.classify(&line)?;
        trace!(code = cookie.code(), cookie = %cookie, phase = %monster.phase(), "Classified");
        tally.record(cookie);
        if echo {
            writeln!(out, "{:>3}: {}", cookie.code(), line)?;
        }
    }
    info!(lines = tally.lines(), phase = %monster.phase(), "Input ended");
    Ok(tally)
}

/// Sends the CLIP `login` command.
async fn send_login<W>(writer: &mut W, login: &LoginConfig) -> Result<(), SessionError>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = BytesMut::new();
    LineCodec::new().encode(login.command(), &mut buf)?;
    writer.write_all(&buf).await?;
    writer.flush().await?;
    info!(user = %login.user, client = %login.client, "Sent CLIP login");
    Ok(())
}
