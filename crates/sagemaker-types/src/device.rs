//! Compilation target devices and model frameworks.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Device or platform a compilation job targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetDevice {
    Lambda,
    MlM4,
    MlM5,
    MlC4,
    MlC5,
    MlP2,
    MlP3,
    MlInf1,
    JetsonTx1,
    JetsonTx2,
    JetsonNano,
    JetsonXavier,
    Rasp3b,
    Imx8qm,
    Deeplens,
    Rk3399,
    Rk3288,
    Aisage,
    SbeC,
    Qcs605,
    Qcs603,
    SitaraAm57x,
    AmbaCv22,
    X86Win32,
    X86Win64,
    Coreml,
}

impl TargetDevice {
    /// The wire value for this target device.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lambda => "lambda",
            Self::MlM4 => "ml_m4",
            Self::MlM5 => "ml_m5",
            Self::MlC4 => "ml_c4",
            Self::MlC5 => "ml_c5",
            Self::MlP2 => "ml_p2",
            Self::MlP3 => "ml_p3",
            Self::MlInf1 => "ml_inf1",
            Self::JetsonTx1 => "jetson_tx1",
            Self::JetsonTx2 => "jetson_tx2",
            Self::JetsonNano => "jetson_nano",
            Self::JetsonXavier => "jetson_xavier",
            Self::Rasp3b => "rasp3b",
            Self::Imx8qm => "imx8qm",
            Self::Deeplens => "deeplens",
            Self::Rk3399 => "rk3399",
            Self::Rk3288 => "rk3288",
            Self::Aisage => "aisage",
            Self::SbeC => "sbe_c",
            Self::Qcs605 => "qcs605",
            Self::Qcs603 => "qcs603",
            Self::SitaraAm57x => "sitara_am57x",
            Self::AmbaCv22 => "amba_cv22",
            Self::X86Win32 => "x86_win32",
            Self::X86Win64 => "x86_win64",
            Self::Coreml => "coreml",
        }
    }
}

impl fmt::Display for TargetDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TargetDevice> for String {
    fn from(value: TargetDevice) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TargetDevice {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lambda" => Ok(Self::Lambda),
            "ml_m4" => Ok(Self::MlM4),
            "ml_m5" => Ok(Self::MlM5),
            "ml_c4" => Ok(Self::MlC4),
            "ml_c5" => Ok(Self::MlC5),
            "ml_p2" => Ok(Self::MlP2),
            "ml_p3" => Ok(Self::MlP3),
            "ml_inf1" => Ok(Self::MlInf1),
            "jetson_tx1" => Ok(Self::JetsonTx1),
            "jetson_tx2" => Ok(Self::JetsonTx2),
            "jetson_nano" => Ok(Self::JetsonNano),
            "jetson_xavier" => Ok(Self::JetsonXavier),
            "rasp3b" => Ok(Self::Rasp3b),
            "imx8qm" => Ok(Self::Imx8qm),
            "deeplens" => Ok(Self::Deeplens),
            "rk3399" => Ok(Self::Rk3399),
            "rk3288" => Ok(Self::Rk3288),
            "aisage" => Ok(Self::Aisage),
            "sbe_c" => Ok(Self::SbeC),
            "qcs605" => Ok(Self::Qcs605),
            "qcs603" => Ok(Self::Qcs603),
            "sitara_am57x" => Ok(Self::SitaraAm57x),
            "amba_cv22" => Ok(Self::AmbaCv22),
            "x86_win32" => Ok(Self::X86Win32),
            "x86_win64" => Ok(Self::X86Win64),
            "coreml" => Ok(Self::Coreml),
            other => Err(SageMakerError::unknown_enum_value("TargetDevice", other)),
        }
    }
}

/// Framework the model being compiled was trained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    TensorFlow,
    Keras,
    Mxnet,
    Onnx,
    Pytorch,
    Xgboost,
    Tflite,
}

impl Framework {
    /// The wire value for this framework.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TensorFlow => "TENSORFLOW",
            Self::Keras => "KERAS",
            Self::Mxnet => "MXNET",
            Self::Onnx => "ONNX",
            Self::Pytorch => "PYTORCH",
            Self::Xgboost => "XGBOOST",
            Self::Tflite => "TFLITE",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Framework> for String {
    fn from(value: Framework) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Framework {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TENSORFLOW" => Ok(Self::TensorFlow),
            "KERAS" => Ok(Self::Keras),
            "MXNET" => Ok(Self::Mxnet),
            "ONNX" => Ok(Self::Onnx),
            "PYTORCH" => Ok(Self::Pytorch),
            "XGBOOST" => Ok(Self::Xgboost),
            "TFLITE" => Ok(Self::Tflite),
            other => Err(SageMakerError::unknown_enum_value("Framework", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_device_round_trip() {
        assert_eq!(TargetDevice::JetsonXavier.as_str(), "jetson_xavier");
        assert_eq!("sbe_c".parse::<TargetDevice>().unwrap(), TargetDevice::SbeC);
        assert_eq!(String::from(TargetDevice::X86Win64), "x86_win64");
    }

    #[test]
    fn test_framework_is_upper_case_on_the_wire() {
        assert_eq!(Framework::TensorFlow.as_str(), "TENSORFLOW");
        assert_eq!("TFLITE".parse::<Framework>().unwrap(), Framework::Tflite);
    }

    #[test]
    fn test_unknown_device_is_rejected() {
        assert!("ml_c6".parse::<TargetDevice>().is_err());
    }
}
