// src/core/net.rs

// HTTP/1.0 over TCP (std-only)

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

/// Perform a plain HTTP GET request and return the response body as a String.
///
/// * `host` – hostname (no protocol, no port)
/// * `port` – usually 80
/// * `path` – path + query string starting with `/`
///
/// HTTP/1.0 with `Connection: close`, so the server ends the stream and we
/// just read to EOF. No chunked transfer, no redirects.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: dairyscan/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// Fire-and-forget JSON POST. The Apps-Script endpoint gives no readable
/// response, so only the status line is checked.
pub fn http_post_json(
    host: &str,
    port: u16,
    path: &str,
    body: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "POST {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: dairyscan/0.3\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        path,
        host,
        body.len(),
        body
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    // Apps-Script answers with a redirect to the result page; accept it.
    if !(status.contains("200") || status.contains("302")) {
        return Err(format!("HTTP error: {} {}{}", status, host, path).into());
    }
    Ok(())
}
