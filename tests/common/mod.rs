// Shared helpers for the integration tests.
#![allow(dead_code)]

use arkcfg::camera::camera_controller::ConfigTransport;
use arkcfg::errors::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

/// Answers from a fixed per-host script and records every URL it is asked to send.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<Ipv4Addr, Result<u16, AppError>>,
    pub sent: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn respond(mut self, address: Ipv4Addr, response: Result<u16, AppError>) -> Self {
        self.responses.insert(address, response);
        self
    }

    pub fn sent_urls(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigTransport for ScriptedTransport {
    async fn send(&self, url: &str) -> Result<u16, AppError> {
        self.sent.lock().unwrap().push(url.to_string());
        let host = url
            .trim_start_matches("http://")
            .split(['/', ':'])
            .next()
            .and_then(|h| h.parse::<Ipv4Addr>().ok());
        match host.and_then(|h| self.responses.get(&h)) {
            Some(response) => response.clone(),
            None => Ok(200),
        }
    }
}

pub fn default_pool() -> Vec<Ipv4Addr> {
    (70..76).map(|octet| Ipv4Addr::new(192, 168, 26, octet)).collect()
}
