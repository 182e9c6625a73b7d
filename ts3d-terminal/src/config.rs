//! Command-line configuration for the renderer binary.

use std::time::Duration;

use anyhow::{anyhow, Result};
use ts3d_core::ShadeRamp;

/// Runtime options parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub fps: u64,
    pub frames: Option<u64>,
    pub wireframe: bool,
    pub ramp: ShadeRamp,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            fps: 30,
            frames: None,
            wireframe: false,
            ramp: ShadeRamp::default(),
        }
    }
}

impl Config {
    /// Parse flags of the form `--width 120 --fps 60 --wireframe`.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--width" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --width"))?;
                    config.width = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --width value: {}", v))?;
                }
                "--height" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --height"))?;
                    config.height = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --height value: {}", v))?;
                }
                "--fps" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --fps"))?;
                    config.fps = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --fps value: {}", v))?;
                }
                "--frames" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --frames"))?;
                    config.frames = Some(
                        v.parse()
                            .map_err(|_| anyhow!("invalid --frames value: {}", v))?,
                    );
                }
                "--ramp" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --ramp"))?;
                    config.ramp = v
                        .parse()
                        .map_err(|e| anyhow!("invalid --ramp value: {}", e))?;
                }
                "--wireframe" => {
                    config.wireframe = true;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        if config.width == 0 || config.height == 0 {
            return Err(anyhow!("screen dimensions must be nonzero"));
        }

        Ok(config)
    }

    /// Target duration of one frame, or `None` when pacing is uncapped.
    pub fn frame_time(&self) -> Option<Duration> {
        if self.fps == 0 {
            None
        } else {
            Some(Duration::from_millis(1000 / self.fps))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_when_no_flags_given() {
        let config = Config::parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 40);
        assert_eq!(config.fps, 30);
        assert_eq!(config.frames, None);
        assert!(!config.wireframe);
    }

    #[test]
    fn parses_dimensions_and_pacing() {
        let config =
            Config::parse(&args(&["--width", "120", "--height", "50", "--fps", "60"])).unwrap();
        assert_eq!(config.width, 120);
        assert_eq!(config.height, 50);
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn parses_frames_wireframe_and_ramp() {
        let config = Config::parse(&args(&[
            "--frames",
            "90",
            "--wireframe",
            "--ramp",
            " .:-=+*#%@&X",
        ]))
        .unwrap();
        assert_eq!(config.frames, Some(90));
        assert!(config.wireframe);
        assert_eq!(config.ramp.glyph_for(-1.0), ' ');
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Config::parse(&args(&["--colour"])).is_err());
    }

    #[test]
    fn rejects_missing_values() {
        assert!(Config::parse(&args(&["--width"])).is_err());
        assert!(Config::parse(&args(&["--fps", "30", "--frames"])).is_err());
    }

    #[test]
    fn rejects_unparseable_values() {
        assert!(Config::parse(&args(&["--width", "wide"])).is_err());
        assert!(Config::parse(&args(&["--ramp", "abc"])).is_err());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Config::parse(&args(&["--width", "0"])).is_err());
        assert!(Config::parse(&args(&["--height", "0"])).is_err());
    }

    #[test]
    fn fps_zero_means_uncapped() {
        let config = Config::parse(&args(&["--fps", "0"])).unwrap();
        assert_eq!(config.frame_time(), None);

        let default = Config::default();
        assert_eq!(default.frame_time(), Some(Duration::from_millis(33)));
    }
}
