#![allow(dead_code)]

use gge4_client::infrastructure::stub::StubTransport;
use gge4_client::{Credentials, GatewayClient, GatewayConfig};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const HMAC_KEY: &str = "test-hmac-key";
pub const KEY_ID: &str = "54321";

pub fn credentials() -> Credentials {
    Credentials::new("AD1234-56", "p4ssw0rd", HMAC_KEY, KEY_ID)
}

pub fn stub_client(stub: &StubTransport) -> GatewayClient {
    GatewayClient::new(credentials(), GatewayConfig::test(), Box::new(stub.clone()))
}

pub fn receipt(bank_resp_code: &str, exact_resp_code: &str) -> Value {
    json!({
        "transaction_error": 0,
        "transaction_approved": if bank_resp_code == "100" { 1 } else { 0 },
        "exact_resp_code": exact_resp_code,
        "exact_message": "Transaction Normal",
        "bank_resp_code": bank_resp_code,
        "bank_message": "",
        "transaction_tag": 1234567,
        "authorization_num": "ET0001",
        "sequence_no": "000001",
        "avs": "N",
        "cvv2": "M",
        "retrieval_ref_no": "20240101",
        "transarmor_token": "1234567890121111",
    })
}

/// A single-shot HTTP server that records the raw request and answers with
/// the given status and body.
pub async fn serve_once(status: u16, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);
            if request_complete(&received) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&received).into_owned()
    });

    (format!("http://{addr}/transaction/"), handle)
}

fn request_complete(received: &[u8]) -> bool {
    let text = String::from_utf8_lossy(received);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    received.len() >= header_end + 4 + content_length
}

/// Splits a raw HTTP request into lowercased header pairs and the body.
pub fn parse_request(raw: &str) -> (Vec<(String, String)>, String) {
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let headers = head
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();
    (headers, body.to_string())
}

pub fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}
