use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// A proof shaped like the ones IDKit produces
pub fn sample_proof() -> Value {
    json!({
        "proof": "0x1aa8b8f3b2d2de5ff452c0e1a83e29d6bf46fb83ef35dc5957121ff3d3698a1119090fb8a1f2a4a2b3c5bd8e8b0cf7c0e5d9e4d2d8f3b0d2e2b5a54b7e6d5c0a0",
        "merkle_root": "0x2a7c09e8af01f39a87d89e9f0a9ba66fbf6fb304cc643051dd4ea24c4e9f7e8d",
        "nullifier_hash": "0x1359a81e3a42dc1c34786cbefbcc672a3d730510dba7a3be9941b207b0cf52fa",
        "verification_level": "orb"
    })
}
