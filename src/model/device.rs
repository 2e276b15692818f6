//! Device configuration for local inference.

use std::str::FromStr;

use crate::Error;

/// Compute device for local inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// CPU execution (default).
    #[default]
    Cpu,

    /// CUDA GPU execution.
    #[cfg(feature = "cuda")]
    Cuda {
        /// GPU device ID (0-indexed).
        device_id: u32,
    },
}

impl Device {
    /// Create CPU device.
    pub fn cpu() -> Self {
        Self::Cpu
    }

    /// Create CUDA device with the given device ID.
    #[cfg(feature = "cuda")]
    pub fn cuda(device_id: u32) -> Self {
        Self::Cuda { device_id }
    }

    /// Best available device for this build.
    ///
    /// With CUDA compiled in, ONNX Runtime falls back to CPU by itself when the
    /// CUDA provider cannot be registered at session creation.
    pub fn auto() -> Self {
        #[cfg(feature = "cuda")]
        {
            Self::Cuda { device_id: 0 }
        }
        #[cfg(not(feature = "cuda"))]
        {
            Self::Cpu
        }
    }

    /// Get the device name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            #[cfg(feature = "cuda")]
            Self::Cuda { .. } => "CUDA",
        }
    }
}

impl FromStr for Device {
    type Err = Error;

    /// Parse `auto`, `cpu`, `cuda` or `cuda:<id>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "auto" => Ok(Self::auto()),
            "cpu" => Ok(Self::Cpu),
            #[cfg(feature = "cuda")]
            "cuda" => Ok(Self::Cuda { device_id: 0 }),
            #[cfg(feature = "cuda")]
            other if other.starts_with("cuda:") => other[5..]
                .parse()
                .map(|device_id| Self::Cuda { device_id })
                .map_err(|_| Error::Configuration(format!("Invalid CUDA device: {s}"))),
            #[cfg(not(feature = "cuda"))]
            other if other == "cuda" || other.starts_with("cuda:") => Err(Error::Configuration(
                "CUDA requested but this build lacks the `cuda` feature".to_string(),
            )),
            _ => Err(Error::Configuration(format!("Unknown device: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cpu() {
        assert_eq!(Device::default(), Device::Cpu);
    }

    #[test]
    fn cpu_name() {
        assert_eq!(Device::cpu().name(), "CPU");
    }

    #[test]
    fn parse_cpu_and_auto() {
        assert_eq!("cpu".parse::<Device>().unwrap(), Device::Cpu);
        assert_eq!("AUTO".parse::<Device>().unwrap(), Device::auto());
    }

    #[test]
    fn parse_unknown_device_fails() {
        let err = "tpu".parse::<Device>().unwrap_err();
        assert!(err.to_string().contains("Unknown device"));
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn cuda_without_feature_fails() {
        let err = "cuda".parse::<Device>().unwrap_err();
        assert!(err.to_string().contains("cuda"));
    }

    #[cfg(feature = "cuda")]
    #[test]
    fn parse_cuda_with_id() {
        assert_eq!("cuda:1".parse::<Device>().unwrap(), Device::cuda(1));
        assert_eq!(Device::cuda(0).name(), "CUDA");
    }
}
