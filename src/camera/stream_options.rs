use crate::errors::AppError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Stream resolutions the camera firmware accepts, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    R1280x720,
    R960x544,
    R800x600,
    R800x480,
    R704x400,
    R640x480,
    R480x360,
    R320x240,
}

// Firmware code 5 is not offered by the device.
const RESOLUTION_TABLE: [(Resolution, &str, &str); 8] = [
    (Resolution::R1280x720, "1280x720", "1"),
    (Resolution::R960x544, "960x544", "2"),
    (Resolution::R800x600, "800x600", "3"),
    (Resolution::R800x480, "800x480", "4"),
    (Resolution::R704x400, "704x400", "6"),
    (Resolution::R640x480, "640x480", "7"),
    (Resolution::R480x360, "480x360", "8"),
    (Resolution::R320x240, "320x240", "9"),
];

impl Resolution {
    pub fn all() -> impl Iterator<Item = Resolution> {
        RESOLUTION_TABLE.iter().map(|(r, _, _)| *r)
    }

    pub fn from_label(label: &str) -> Result<Self, AppError> {
        RESOLUTION_TABLE
            .iter()
            .find(|(_, l, _)| *l == label.trim())
            .map(|(r, _, _)| *r)
            .ok_or_else(|| AppError::UnknownOption { kind: "resolution", label: label.to_string() })
    }

    pub fn label(self) -> &'static str {
        RESOLUTION_TABLE.iter().find(|(r, _, _)| *r == self).map(|(_, l, _)| *l).unwrap_or_default()
    }

    /// Opaque code used in the `appquery.cgi` query string.
    pub fn code(self) -> &'static str {
        RESOLUTION_TABLE.iter().find(|(r, _, _)| *r == self).map(|(_, _, c)| *c).unwrap_or_default()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::from_label(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRate {
    Fps25,
    Fps5,
    Fps1,
}

const FRAME_RATE_TABLE: [(FrameRate, &str, &str); 3] = [
    (FrameRate::Fps25, "25 FPS", "0"),
    (FrameRate::Fps5, "5 FPS", "1"),
    (FrameRate::Fps1, "1 FPS", "2"),
];

impl FrameRate {
    pub fn all() -> impl Iterator<Item = FrameRate> {
        FRAME_RATE_TABLE.iter().map(|(f, _, _)| *f)
    }

    pub fn from_label(label: &str) -> Result<Self, AppError> {
        FRAME_RATE_TABLE
            .iter()
            .find(|(_, l, _)| *l == label.trim())
            .map(|(f, _, _)| *f)
            .ok_or_else(|| AppError::UnknownOption { kind: "frame rate", label: label.to_string() })
    }

    pub fn label(self) -> &'static str {
        FRAME_RATE_TABLE.iter().find(|(f, _, _)| *f == self).map(|(_, l, _)| *l).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        FRAME_RATE_TABLE.iter().find(|(f, _, _)| *f == self).map(|(_, _, c)| *c).unwrap_or_default()
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FrameRate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameRate::from_label(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    H264,
    Mjpeg,
}

impl Codec {
    pub fn all() -> [Codec; 2] {
        [Codec::H264, Codec::Mjpeg]
    }

    pub fn label(self) -> &'static str {
        match self {
            Codec::H264 => "H264",
            Codec::Mjpeg => "MJPEG",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Codec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "H264" => Ok(Codec::H264),
            "MJPEG" => Ok(Codec::Mjpeg),
            _ => Err(AppError::UnsupportedCodec(s.to_string())),
        }
    }
}

/// URL template family spoken by the deployed camera firmware.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RequestProfile {
    /// Single H.264 template with fixed power, quality and bitrate parameters.
    #[default]
    FixedH264,
    /// Per-codec parameter prefix (`v_v_br` for H264, `v_v_j` for MJPEG).
    CodecAware,
}

impl fmt::Display for RequestProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestProfile::FixedH264 => f.write_str("fixed-h264"),
            RequestProfile::CodecAware => f.write_str("codec-aware"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolution_table_matches_firmware_codes() {
        let expected = [
            ("1280x720", "1"),
            ("960x544", "2"),
            ("800x600", "3"),
            ("800x480", "4"),
            ("704x400", "6"),
            ("640x480", "7"),
            ("480x360", "8"),
            ("320x240", "9"),
        ];
        for (label, code) in expected {
            let res = Resolution::from_label(label).unwrap();
            assert_eq!(res.label(), label);
            assert_eq!(res.code(), code);
        }
        assert_eq!(Resolution::all().count(), expected.len());
    }

    #[test]
    fn frame_rate_table_matches_firmware_codes() {
        for (label, code) in [("25 FPS", "0"), ("5 FPS", "1"), ("1 FPS", "2")] {
            let fps: FrameRate = label.parse().unwrap();
            assert_eq!(fps.code(), code);
        }
    }

    #[test]
    fn codes_are_unique() {
        let res_codes: HashSet<_> = Resolution::all().map(Resolution::code).collect();
        assert_eq!(res_codes.len(), Resolution::all().count());
        let fps_codes: HashSet<_> = FrameRate::all().map(FrameRate::code).collect();
        assert_eq!(fps_codes.len(), FrameRate::all().count());
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            Resolution::from_label("1920x1080"),
            Err(AppError::UnknownOption { kind: "resolution", label: "1920x1080".to_string() })
        );
        assert!(matches!(FrameRate::from_label("30 FPS"), Err(AppError::UnknownOption { .. })));
        assert!(matches!(FrameRate::from_label(""), Err(AppError::UnknownOption { .. })));
    }

    #[test]
    fn codec_parsing_fails_closed() {
        assert_eq!("H264".parse::<Codec>(), Ok(Codec::H264));
        assert_eq!("mjpeg".parse::<Codec>(), Ok(Codec::Mjpeg));
        assert_eq!("MJPEG ".parse::<Codec>(), Ok(Codec::Mjpeg));
        assert_eq!("H265".parse::<Codec>(), Err(AppError::UnsupportedCodec("H265".to_string())));
        assert!(matches!("MJPEG'".parse::<Codec>(), Err(AppError::UnsupportedCodec(_))));
    }
}
