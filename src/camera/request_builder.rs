use crate::camera::stream_options::{Codec, FrameRate, RequestProfile, Resolution};
use crate::errors::AppError;
use log::debug;
use std::net::Ipv4Addr;

pub const CONFIG_ENDPOINT_PATH: &str = "/appquery.cgi";

/// One camera plus the stream parameters to push to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationRequest {
    pub address: Ipv4Addr,
    pub codec: Codec,
    pub resolution: Resolution,
    pub frame_rate: FrameRate,
}

#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder {
    profile: RequestProfile,
    http_port: u16,
}

impl RequestBuilder {
    pub fn new(profile: RequestProfile, http_port: u16) -> Self {
        RequestBuilder { profile, http_port }
    }

    pub fn profile(&self) -> RequestProfile {
        self.profile
    }

    /// Builds the configuration URL from human-readable option labels.
    pub fn build_url(
        &self,
        address: Ipv4Addr,
        codec: Codec,
        resolution_label: &str,
        fps_label: &str,
    ) -> Result<String, AppError> {
        let request = ConfigurationRequest {
            address,
            codec,
            resolution: Resolution::from_label(resolution_label)?,
            frame_rate: FrameRate::from_label(fps_label)?,
        };
        self.url_for(&request)
    }

    pub fn url_for(&self, request: &ConfigurationRequest) -> Result<String, AppError> {
        let query = self.query_for(request)?;
        let url = format!("{}{}?{}", self.base_url(request.address), CONFIG_ENDPOINT_PATH, query);
        debug!("Built configuration URL for {} ({} profile): {}", request.address, self.profile, url);
        Ok(url)
    }

    fn base_url(&self, address: Ipv4Addr) -> String {
        if self.http_port == 80 {
            format!("http://{}", address)
        } else {
            format!("http://{}:{}", address, self.http_port)
        }
    }

    fn query_for(&self, request: &ConfigurationRequest) -> Result<String, AppError> {
        let res = request.resolution.code();
        let fps = request.frame_rate.code();
        match self.profile {
            RequestProfile::FixedH264 => match request.codec {
                Codec::H264 => Ok(format!(
                    "v_v_hr={}&v_v_hf={}&v_v_hp=0&v_v_hq=40&v_v_hi=30&v_v_hbm=1&v_v_hbr=hC10m&btOK=Apply",
                    res, fps
                )),
                Codec::Mjpeg => Err(AppError::UnsupportedCodec(format!(
                    "{} (profile '{}' only supports H264)",
                    request.codec, self.profile
                ))),
            },
            RequestProfile::CodecAware => {
                let prefix = match request.codec {
                    Codec::H264 => "v_v_br",
                    Codec::Mjpeg => "v_v_j",
                };
                Ok(format!(
                    "{p}r={}&{p}f={}&{p}q=80&{p}bm=0&btOK=Apply",
                    res,
                    fps,
                    p = prefix
                ))
            }
        }
    }
}
