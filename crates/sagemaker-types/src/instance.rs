//! Instance type enumerations.
//!
//! These are the large closed sets the service documents for hosting,
//! processing, and batch transform. Records store them as strings, so newer
//! instance families the service adds later remain usable without a rebuild.

use crate::error::SageMakerError;
use std::fmt;
use std::str::FromStr;

/// Instance type backing a hosted endpoint variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductionVariantInstanceType {
    MlT2Medium,
    MlT2Large,
    MlT2Xlarge,
    MlT22xlarge,
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlM5dLarge,
    MlM5dXlarge,
    MlM5d2xlarge,
    MlM5d4xlarge,
    MlM5d12xlarge,
    MlM5d24xlarge,
    MlC4Large,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Large,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlC5dLarge,
    MlC5dXlarge,
    MlC5d2xlarge,
    MlC5d4xlarge,
    MlC5d9xlarge,
    MlC5d18xlarge,
    MlG4dnXlarge,
    MlG4dn2xlarge,
    MlG4dn4xlarge,
    MlG4dn8xlarge,
    MlG4dn12xlarge,
    MlG4dn16xlarge,
    MlR5Large,
    MlR5Xlarge,
    MlR52xlarge,
    MlR54xlarge,
    MlR512xlarge,
    MlR524xlarge,
    MlR5dLarge,
    MlR5dXlarge,
    MlR5d2xlarge,
    MlR5d4xlarge,
    MlR5d12xlarge,
    MlR5d24xlarge,
    MlInf1Xlarge,
    MlInf12xlarge,
    MlInf16xlarge,
    MlInf124xlarge,
}

impl ProductionVariantInstanceType {
    /// The wire value for this instance type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MlT2Medium => "ml.t2.medium",
            Self::MlT2Large => "ml.t2.large",
            Self::MlT2Xlarge => "ml.t2.xlarge",
            Self::MlT22xlarge => "ml.t2.2xlarge",
            Self::MlM4Xlarge => "ml.m4.xlarge",
            Self::MlM42xlarge => "ml.m4.2xlarge",
            Self::MlM44xlarge => "ml.m4.4xlarge",
            Self::MlM410xlarge => "ml.m4.10xlarge",
            Self::MlM416xlarge => "ml.m4.16xlarge",
            Self::MlM5Large => "ml.m5.large",
            Self::MlM5Xlarge => "ml.m5.xlarge",
            Self::MlM52xlarge => "ml.m5.2xlarge",
            Self::MlM54xlarge => "ml.m5.4xlarge",
            Self::MlM512xlarge => "ml.m5.12xlarge",
            Self::MlM524xlarge => "ml.m5.24xlarge",
            Self::MlM5dLarge => "ml.m5d.large",
            Self::MlM5dXlarge => "ml.m5d.xlarge",
            Self::MlM5d2xlarge => "ml.m5d.2xlarge",
            Self::MlM5d4xlarge => "ml.m5d.4xlarge",
            Self::MlM5d12xlarge => "ml.m5d.12xlarge",
            Self::MlM5d24xlarge => "ml.m5d.24xlarge",
            Self::MlC4Large => "ml.c4.large",
            Self::MlC4Xlarge => "ml.c4.xlarge",
            Self::MlC42xlarge => "ml.c4.2xlarge",
            Self::MlC44xlarge => "ml.c4.4xlarge",
            Self::MlC48xlarge => "ml.c4.8xlarge",
            Self::MlP2Xlarge => "ml.p2.xlarge",
            Self::MlP28xlarge => "ml.p2.8xlarge",
            Self::MlP216xlarge => "ml.p2.16xlarge",
            Self::MlP32xlarge => "ml.p3.2xlarge",
            Self::MlP38xlarge => "ml.p3.8xlarge",
            Self::MlP316xlarge => "ml.p3.16xlarge",
            Self::MlC5Large => "ml.c5.large",
            Self::MlC5Xlarge => "ml.c5.xlarge",
            Self::MlC52xlarge => "ml.c5.2xlarge",
            Self::MlC54xlarge => "ml.c5.4xlarge",
            Self::MlC59xlarge => "ml.c5.9xlarge",
            Self::MlC518xlarge => "ml.c5.18xlarge",
            Self::MlC5dLarge => "ml.c5d.large",
            Self::MlC5dXlarge => "ml.c5d.xlarge",
            Self::MlC5d2xlarge => "ml.c5d.2xlarge",
            Self::MlC5d4xlarge => "ml.c5d.4xlarge",
            Self::MlC5d9xlarge => "ml.c5d.9xlarge",
            Self::MlC5d18xlarge => "ml.c5d.18xlarge",
            Self::MlG4dnXlarge => "ml.g4dn.xlarge",
            Self::MlG4dn2xlarge => "ml.g4dn.2xlarge",
            Self::MlG4dn4xlarge => "ml.g4dn.4xlarge",
            Self::MlG4dn8xlarge => "ml.g4dn.8xlarge",
            Self::MlG4dn12xlarge => "ml.g4dn.12xlarge",
            Self::MlG4dn16xlarge => "ml.g4dn.16xlarge",
            Self::MlR5Large => "ml.r5.large",
            Self::MlR5Xlarge => "ml.r5.xlarge",
            Self::MlR52xlarge => "ml.r5.2xlarge",
            Self::MlR54xlarge => "ml.r5.4xlarge",
            Self::MlR512xlarge => "ml.r5.12xlarge",
            Self::MlR524xlarge => "ml.r5.24xlarge",
            Self::MlR5dLarge => "ml.r5d.large",
            Self::MlR5dXlarge => "ml.r5d.xlarge",
            Self::MlR5d2xlarge => "ml.r5d.2xlarge",
            Self::MlR5d4xlarge => "ml.r5d.4xlarge",
            Self::MlR5d12xlarge => "ml.r5d.12xlarge",
            Self::MlR5d24xlarge => "ml.r5d.24xlarge",
            Self::MlInf1Xlarge => "ml.inf1.xlarge",
            Self::MlInf12xlarge => "ml.inf1.2xlarge",
            Self::MlInf16xlarge => "ml.inf1.6xlarge",
            Self::MlInf124xlarge => "ml.inf1.24xlarge",
        }
    }
}

impl fmt::Display for ProductionVariantInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProductionVariantInstanceType> for String {
    fn from(value: ProductionVariantInstanceType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProductionVariantInstanceType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml.t2.medium" => Ok(Self::MlT2Medium),
            "ml.t2.large" => Ok(Self::MlT2Large),
            "ml.t2.xlarge" => Ok(Self::MlT2Xlarge),
            "ml.t2.2xlarge" => Ok(Self::MlT22xlarge),
            "ml.m4.xlarge" => Ok(Self::MlM4Xlarge),
            "ml.m4.2xlarge" => Ok(Self::MlM42xlarge),
            "ml.m4.4xlarge" => Ok(Self::MlM44xlarge),
            "ml.m4.10xlarge" => Ok(Self::MlM410xlarge),
            "ml.m4.16xlarge" => Ok(Self::MlM416xlarge),
            "ml.m5.large" => Ok(Self::MlM5Large),
            "ml.m5.xlarge" => Ok(Self::MlM5Xlarge),
            "ml.m5.2xlarge" => Ok(Self::MlM52xlarge),
            "ml.m5.4xlarge" => Ok(Self::MlM54xlarge),
            "ml.m5.12xlarge" => Ok(Self::MlM512xlarge),
            "ml.m5.24xlarge" => Ok(Self::MlM524xlarge),
            "ml.m5d.large" => Ok(Self::MlM5dLarge),
            "ml.m5d.xlarge" => Ok(Self::MlM5dXlarge),
            "ml.m5d.2xlarge" => Ok(Self::MlM5d2xlarge),
            "ml.m5d.4xlarge" => Ok(Self::MlM5d4xlarge),
            "ml.m5d.12xlarge" => Ok(Self::MlM5d12xlarge),
            "ml.m5d.24xlarge" => Ok(Self::MlM5d24xlarge),
            "ml.c4.large" => Ok(Self::MlC4Large),
            "ml.c4.xlarge" => Ok(Self::MlC4Xlarge),
            "ml.c4.2xlarge" => Ok(Self::MlC42xlarge),
            "ml.c4.4xlarge" => Ok(Self::MlC44xlarge),
            "ml.c4.8xlarge" => Ok(Self::MlC48xlarge),
            "ml.p2.xlarge" => Ok(Self::MlP2Xlarge),
            "ml.p2.8xlarge" => Ok(Self::MlP28xlarge),
            "ml.p2.16xlarge" => Ok(Self::MlP216xlarge),
            "ml.p3.2xlarge" => Ok(Self::MlP32xlarge),
            "ml.p3.8xlarge" => Ok(Self::MlP38xlarge),
            "ml.p3.16xlarge" => Ok(Self::MlP316xlarge),
            "ml.c5.large" => Ok(Self::MlC5Large),
            "ml.c5.xlarge" => Ok(Self::MlC5Xlarge),
            "ml.c5.2xlarge" => Ok(Self::MlC52xlarge),
            "ml.c5.4xlarge" => Ok(Self::MlC54xlarge),
            "ml.c5.9xlarge" => Ok(Self::MlC59xlarge),
            "ml.c5.18xlarge" => Ok(Self::MlC518xlarge),
            "ml.c5d.large" => Ok(Self::MlC5dLarge),
            "ml.c5d.xlarge" => Ok(Self::MlC5dXlarge),
            "ml.c5d.2xlarge" => Ok(Self::MlC5d2xlarge),
            "ml.c5d.4xlarge" => Ok(Self::MlC5d4xlarge),
            "ml.c5d.9xlarge" => Ok(Self::MlC5d9xlarge),
            "ml.c5d.18xlarge" => Ok(Self::MlC5d18xlarge),
            "ml.g4dn.xlarge" => Ok(Self::MlG4dnXlarge),
            "ml.g4dn.2xlarge" => Ok(Self::MlG4dn2xlarge),
            "ml.g4dn.4xlarge" => Ok(Self::MlG4dn4xlarge),
            "ml.g4dn.8xlarge" => Ok(Self::MlG4dn8xlarge),
            "ml.g4dn.12xlarge" => Ok(Self::MlG4dn12xlarge),
            "ml.g4dn.16xlarge" => Ok(Self::MlG4dn16xlarge),
            "ml.r5.large" => Ok(Self::MlR5Large),
            "ml.r5.xlarge" => Ok(Self::MlR5Xlarge),
            "ml.r5.2xlarge" => Ok(Self::MlR52xlarge),
            "ml.r5.4xlarge" => Ok(Self::MlR54xlarge),
            "ml.r5.12xlarge" => Ok(Self::MlR512xlarge),
            "ml.r5.24xlarge" => Ok(Self::MlR524xlarge),
            "ml.r5d.large" => Ok(Self::MlR5dLarge),
            "ml.r5d.xlarge" => Ok(Self::MlR5dXlarge),
            "ml.r5d.2xlarge" => Ok(Self::MlR5d2xlarge),
            "ml.r5d.4xlarge" => Ok(Self::MlR5d4xlarge),
            "ml.r5d.12xlarge" => Ok(Self::MlR5d12xlarge),
            "ml.r5d.24xlarge" => Ok(Self::MlR5d24xlarge),
            "ml.inf1.xlarge" => Ok(Self::MlInf1Xlarge),
            "ml.inf1.2xlarge" => Ok(Self::MlInf12xlarge),
            "ml.inf1.6xlarge" => Ok(Self::MlInf16xlarge),
            "ml.inf1.24xlarge" => Ok(Self::MlInf124xlarge),
            other => Err(SageMakerError::unknown_enum_value("ProductionVariantInstanceType", other)),
        }
    }
}

/// Instance type backing a processing or monitoring cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingInstanceType {
    MlT3Medium,
    MlT3Large,
    MlT3Xlarge,
    MlT32xlarge,
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlR5Large,
    MlR5Xlarge,
    MlR52xlarge,
    MlR54xlarge,
    MlR58xlarge,
    MlR512xlarge,
    MlR516xlarge,
    MlR524xlarge,
}

impl ProcessingInstanceType {
    /// The wire value for this instance type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MlT3Medium => "ml.t3.medium",
            Self::MlT3Large => "ml.t3.large",
            Self::MlT3Xlarge => "ml.t3.xlarge",
            Self::MlT32xlarge => "ml.t3.2xlarge",
            Self::MlM4Xlarge => "ml.m4.xlarge",
            Self::MlM42xlarge => "ml.m4.2xlarge",
            Self::MlM44xlarge => "ml.m4.4xlarge",
            Self::MlM410xlarge => "ml.m4.10xlarge",
            Self::MlM416xlarge => "ml.m4.16xlarge",
            Self::MlC4Xlarge => "ml.c4.xlarge",
            Self::MlC42xlarge => "ml.c4.2xlarge",
            Self::MlC44xlarge => "ml.c4.4xlarge",
            Self::MlC48xlarge => "ml.c4.8xlarge",
            Self::MlP2Xlarge => "ml.p2.xlarge",
            Self::MlP28xlarge => "ml.p2.8xlarge",
            Self::MlP216xlarge => "ml.p2.16xlarge",
            Self::MlP32xlarge => "ml.p3.2xlarge",
            Self::MlP38xlarge => "ml.p3.8xlarge",
            Self::MlP316xlarge => "ml.p3.16xlarge",
            Self::MlC5Xlarge => "ml.c5.xlarge",
            Self::MlC52xlarge => "ml.c5.2xlarge",
            Self::MlC54xlarge => "ml.c5.4xlarge",
            Self::MlC59xlarge => "ml.c5.9xlarge",
            Self::MlC518xlarge => "ml.c5.18xlarge",
            Self::MlM5Large => "ml.m5.large",
            Self::MlM5Xlarge => "ml.m5.xlarge",
            Self::MlM52xlarge => "ml.m5.2xlarge",
            Self::MlM54xlarge => "ml.m5.4xlarge",
            Self::MlM512xlarge => "ml.m5.12xlarge",
            Self::MlM524xlarge => "ml.m5.24xlarge",
            Self::MlR5Large => "ml.r5.large",
            Self::MlR5Xlarge => "ml.r5.xlarge",
            Self::MlR52xlarge => "ml.r5.2xlarge",
            Self::MlR54xlarge => "ml.r5.4xlarge",
            Self::MlR58xlarge => "ml.r5.8xlarge",
            Self::MlR512xlarge => "ml.r5.12xlarge",
            Self::MlR516xlarge => "ml.r5.16xlarge",
            Self::MlR524xlarge => "ml.r5.24xlarge",
        }
    }
}

impl fmt::Display for ProcessingInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProcessingInstanceType> for String {
    fn from(value: ProcessingInstanceType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProcessingInstanceType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml.t3.medium" => Ok(Self::MlT3Medium),
            "ml.t3.large" => Ok(Self::MlT3Large),
            "ml.t3.xlarge" => Ok(Self::MlT3Xlarge),
            "ml.t3.2xlarge" => Ok(Self::MlT32xlarge),
            "ml.m4.xlarge" => Ok(Self::MlM4Xlarge),
            "ml.m4.2xlarge" => Ok(Self::MlM42xlarge),
            "ml.m4.4xlarge" => Ok(Self::MlM44xlarge),
            "ml.m4.10xlarge" => Ok(Self::MlM410xlarge),
            "ml.m4.16xlarge" => Ok(Self::MlM416xlarge),
            "ml.c4.xlarge" => Ok(Self::MlC4Xlarge),
            "ml.c4.2xlarge" => Ok(Self::MlC42xlarge),
            "ml.c4.4xlarge" => Ok(Self::MlC44xlarge),
            "ml.c4.8xlarge" => Ok(Self::MlC48xlarge),
            "ml.p2.xlarge" => Ok(Self::MlP2Xlarge),
            "ml.p2.8xlarge" => Ok(Self::MlP28xlarge),
            "ml.p2.16xlarge" => Ok(Self::MlP216xlarge),
            "ml.p3.2xlarge" => Ok(Self::MlP32xlarge),
            "ml.p3.8xlarge" => Ok(Self::MlP38xlarge),
            "ml.p3.16xlarge" => Ok(Self::MlP316xlarge),
            "ml.c5.xlarge" => Ok(Self::MlC5Xlarge),
            "ml.c5.2xlarge" => Ok(Self::MlC52xlarge),
            "ml.c5.4xlarge" => Ok(Self::MlC54xlarge),
            "ml.c5.9xlarge" => Ok(Self::MlC59xlarge),
            "ml.c5.18xlarge" => Ok(Self::MlC518xlarge),
            "ml.m5.large" => Ok(Self::MlM5Large),
            "ml.m5.xlarge" => Ok(Self::MlM5Xlarge),
            "ml.m5.2xlarge" => Ok(Self::MlM52xlarge),
            "ml.m5.4xlarge" => Ok(Self::MlM54xlarge),
            "ml.m5.12xlarge" => Ok(Self::MlM512xlarge),
            "ml.m5.24xlarge" => Ok(Self::MlM524xlarge),
            "ml.r5.large" => Ok(Self::MlR5Large),
            "ml.r5.xlarge" => Ok(Self::MlR5Xlarge),
            "ml.r5.2xlarge" => Ok(Self::MlR52xlarge),
            "ml.r5.4xlarge" => Ok(Self::MlR54xlarge),
            "ml.r5.8xlarge" => Ok(Self::MlR58xlarge),
            "ml.r5.12xlarge" => Ok(Self::MlR512xlarge),
            "ml.r5.16xlarge" => Ok(Self::MlR516xlarge),
            "ml.r5.24xlarge" => Ok(Self::MlR524xlarge),
            other => Err(SageMakerError::unknown_enum_value("ProcessingInstanceType", other)),
        }
    }
}

/// Instance type backing a batch transform job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformInstanceType {
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
}

impl TransformInstanceType {
    /// The wire value for this instance type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MlM4Xlarge => "ml.m4.xlarge",
            Self::MlM42xlarge => "ml.m4.2xlarge",
            Self::MlM44xlarge => "ml.m4.4xlarge",
            Self::MlM410xlarge => "ml.m4.10xlarge",
            Self::MlM416xlarge => "ml.m4.16xlarge",
            Self::MlC4Xlarge => "ml.c4.xlarge",
            Self::MlC42xlarge => "ml.c4.2xlarge",
            Self::MlC44xlarge => "ml.c4.4xlarge",
            Self::MlC48xlarge => "ml.c4.8xlarge",
            Self::MlP2Xlarge => "ml.p2.xlarge",
            Self::MlP28xlarge => "ml.p2.8xlarge",
            Self::MlP216xlarge => "ml.p2.16xlarge",
            Self::MlP32xlarge => "ml.p3.2xlarge",
            Self::MlP38xlarge => "ml.p3.8xlarge",
            Self::MlP316xlarge => "ml.p3.16xlarge",
            Self::MlC5Xlarge => "ml.c5.xlarge",
            Self::MlC52xlarge => "ml.c5.2xlarge",
            Self::MlC54xlarge => "ml.c5.4xlarge",
            Self::MlC59xlarge => "ml.c5.9xlarge",
            Self::MlC518xlarge => "ml.c5.18xlarge",
            Self::MlM5Large => "ml.m5.large",
            Self::MlM5Xlarge => "ml.m5.xlarge",
            Self::MlM52xlarge => "ml.m5.2xlarge",
            Self::MlM54xlarge => "ml.m5.4xlarge",
            Self::MlM512xlarge => "ml.m5.12xlarge",
            Self::MlM524xlarge => "ml.m5.24xlarge",
        }
    }
}

impl fmt::Display for TransformInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TransformInstanceType> for String {
    fn from(value: TransformInstanceType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TransformInstanceType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml.m4.xlarge" => Ok(Self::MlM4Xlarge),
            "ml.m4.2xlarge" => Ok(Self::MlM42xlarge),
            "ml.m4.4xlarge" => Ok(Self::MlM44xlarge),
            "ml.m4.10xlarge" => Ok(Self::MlM410xlarge),
            "ml.m4.16xlarge" => Ok(Self::MlM416xlarge),
            "ml.c4.xlarge" => Ok(Self::MlC4Xlarge),
            "ml.c4.2xlarge" => Ok(Self::MlC42xlarge),
            "ml.c4.4xlarge" => Ok(Self::MlC44xlarge),
            "ml.c4.8xlarge" => Ok(Self::MlC48xlarge),
            "ml.p2.xlarge" => Ok(Self::MlP2Xlarge),
            "ml.p2.8xlarge" => Ok(Self::MlP28xlarge),
            "ml.p2.16xlarge" => Ok(Self::MlP216xlarge),
            "ml.p3.2xlarge" => Ok(Self::MlP32xlarge),
            "ml.p3.8xlarge" => Ok(Self::MlP38xlarge),
            "ml.p3.16xlarge" => Ok(Self::MlP316xlarge),
            "ml.c5.xlarge" => Ok(Self::MlC5Xlarge),
            "ml.c5.2xlarge" => Ok(Self::MlC52xlarge),
            "ml.c5.4xlarge" => Ok(Self::MlC54xlarge),
            "ml.c5.9xlarge" => Ok(Self::MlC59xlarge),
            "ml.c5.18xlarge" => Ok(Self::MlC518xlarge),
            "ml.m5.large" => Ok(Self::MlM5Large),
            "ml.m5.xlarge" => Ok(Self::MlM5Xlarge),
            "ml.m5.2xlarge" => Ok(Self::MlM52xlarge),
            "ml.m5.4xlarge" => Ok(Self::MlM54xlarge),
            "ml.m5.12xlarge" => Ok(Self::MlM512xlarge),
            "ml.m5.24xlarge" => Ok(Self::MlM524xlarge),
            other => Err(SageMakerError::unknown_enum_value("TransformInstanceType", other)),
        }
    }
}

/// Elastic Inference accelerator attached to an endpoint variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductionVariantAcceleratorType {
    MlEia1Medium,
    MlEia1Large,
    MlEia1Xlarge,
    MlEia2Medium,
    MlEia2Large,
    MlEia2Xlarge,
}

impl ProductionVariantAcceleratorType {
    /// The wire value for this instance type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MlEia1Medium => "ml.eia1.medium",
            Self::MlEia1Large => "ml.eia1.large",
            Self::MlEia1Xlarge => "ml.eia1.xlarge",
            Self::MlEia2Medium => "ml.eia2.medium",
            Self::MlEia2Large => "ml.eia2.large",
            Self::MlEia2Xlarge => "ml.eia2.xlarge",
        }
    }
}

impl fmt::Display for ProductionVariantAcceleratorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProductionVariantAcceleratorType> for String {
    fn from(value: ProductionVariantAcceleratorType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ProductionVariantAcceleratorType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml.eia1.medium" => Ok(Self::MlEia1Medium),
            "ml.eia1.large" => Ok(Self::MlEia1Large),
            "ml.eia1.xlarge" => Ok(Self::MlEia1Xlarge),
            "ml.eia2.medium" => Ok(Self::MlEia2Medium),
            "ml.eia2.large" => Ok(Self::MlEia2Large),
            "ml.eia2.xlarge" => Ok(Self::MlEia2Xlarge),
            other => Err(SageMakerError::unknown_enum_value("ProductionVariantAcceleratorType", other)),
        }
    }
}

/// EC2 instance type a training job runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingInstanceType {
    MlM4Xlarge,
    MlM42xlarge,
    MlM44xlarge,
    MlM410xlarge,
    MlM416xlarge,
    MlG4dnXlarge,
    MlG4dn2xlarge,
    MlG4dn4xlarge,
    MlG4dn8xlarge,
    MlG4dn12xlarge,
    MlG4dn16xlarge,
    MlM5Large,
    MlM5Xlarge,
    MlM52xlarge,
    MlM54xlarge,
    MlM512xlarge,
    MlM524xlarge,
    MlC4Xlarge,
    MlC42xlarge,
    MlC44xlarge,
    MlC48xlarge,
    MlP2Xlarge,
    MlP28xlarge,
    MlP216xlarge,
    MlP32xlarge,
    MlP38xlarge,
    MlP316xlarge,
    MlP3dn24xlarge,
    MlC5Xlarge,
    MlC52xlarge,
    MlC54xlarge,
    MlC59xlarge,
    MlC518xlarge,
    MlC5nXlarge,
    MlC5n2xlarge,
    MlC5n4xlarge,
    MlC5n9xlarge,
    MlC5n18xlarge,
}

impl TrainingInstanceType {
    /// The wire value for this instance type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MlM4Xlarge => "ml.m4.xlarge",
            Self::MlM42xlarge => "ml.m4.2xlarge",
            Self::MlM44xlarge => "ml.m4.4xlarge",
            Self::MlM410xlarge => "ml.m4.10xlarge",
            Self::MlM416xlarge => "ml.m4.16xlarge",
            Self::MlG4dnXlarge => "ml.g4dn.xlarge",
            Self::MlG4dn2xlarge => "ml.g4dn.2xlarge",
            Self::MlG4dn4xlarge => "ml.g4dn.4xlarge",
            Self::MlG4dn8xlarge => "ml.g4dn.8xlarge",
            Self::MlG4dn12xlarge => "ml.g4dn.12xlarge",
            Self::MlG4dn16xlarge => "ml.g4dn.16xlarge",
            Self::MlM5Large => "ml.m5.large",
            Self::MlM5Xlarge => "ml.m5.xlarge",
            Self::MlM52xlarge => "ml.m5.2xlarge",
            Self::MlM54xlarge => "ml.m5.4xlarge",
            Self::MlM512xlarge => "ml.m5.12xlarge",
            Self::MlM524xlarge => "ml.m5.24xlarge",
            Self::MlC4Xlarge => "ml.c4.xlarge",
            Self::MlC42xlarge => "ml.c4.2xlarge",
            Self::MlC44xlarge => "ml.c4.4xlarge",
            Self::MlC48xlarge => "ml.c4.8xlarge",
            Self::MlP2Xlarge => "ml.p2.xlarge",
            Self::MlP28xlarge => "ml.p2.8xlarge",
            Self::MlP216xlarge => "ml.p2.16xlarge",
            Self::MlP32xlarge => "ml.p3.2xlarge",
            Self::MlP38xlarge => "ml.p3.8xlarge",
            Self::MlP316xlarge => "ml.p3.16xlarge",
            Self::MlP3dn24xlarge => "ml.p3dn.24xlarge",
            Self::MlC5Xlarge => "ml.c5.xlarge",
            Self::MlC52xlarge => "ml.c5.2xlarge",
            Self::MlC54xlarge => "ml.c5.4xlarge",
            Self::MlC59xlarge => "ml.c5.9xlarge",
            Self::MlC518xlarge => "ml.c5.18xlarge",
            Self::MlC5nXlarge => "ml.c5n.xlarge",
            Self::MlC5n2xlarge => "ml.c5n.2xlarge",
            Self::MlC5n4xlarge => "ml.c5n.4xlarge",
            Self::MlC5n9xlarge => "ml.c5n.9xlarge",
            Self::MlC5n18xlarge => "ml.c5n.18xlarge",
        }
    }
}

impl fmt::Display for TrainingInstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TrainingInstanceType> for String {
    fn from(value: TrainingInstanceType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for TrainingInstanceType {
    type Err = SageMakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ml.m4.xlarge" => Ok(Self::MlM4Xlarge),
            "ml.m4.2xlarge" => Ok(Self::MlM42xlarge),
            "ml.m4.4xlarge" => Ok(Self::MlM44xlarge),
            "ml.m4.10xlarge" => Ok(Self::MlM410xlarge),
            "ml.m4.16xlarge" => Ok(Self::MlM416xlarge),
            "ml.g4dn.xlarge" => Ok(Self::MlG4dnXlarge),
            "ml.g4dn.2xlarge" => Ok(Self::MlG4dn2xlarge),
            "ml.g4dn.4xlarge" => Ok(Self::MlG4dn4xlarge),
            "ml.g4dn.8xlarge" => Ok(Self::MlG4dn8xlarge),
            "ml.g4dn.12xlarge" => Ok(Self::MlG4dn12xlarge),
            "ml.g4dn.16xlarge" => Ok(Self::MlG4dn16xlarge),
            "ml.m5.large" => Ok(Self::MlM5Large),
            "ml.m5.xlarge" => Ok(Self::MlM5Xlarge),
            "ml.m5.2xlarge" => Ok(Self::MlM52xlarge),
            "ml.m5.4xlarge" => Ok(Self::MlM54xlarge),
            "ml.m5.12xlarge" => Ok(Self::MlM512xlarge),
            "ml.m5.24xlarge" => Ok(Self::MlM524xlarge),
            "ml.c4.xlarge" => Ok(Self::MlC4Xlarge),
            "ml.c4.2xlarge" => Ok(Self::MlC42xlarge),
            "ml.c4.4xlarge" => Ok(Self::MlC44xlarge),
            "ml.c4.8xlarge" => Ok(Self::MlC48xlarge),
            "ml.p2.xlarge" => Ok(Self::MlP2Xlarge),
            "ml.p2.8xlarge" => Ok(Self::MlP28xlarge),
            "ml.p2.16xlarge" => Ok(Self::MlP216xlarge),
            "ml.p3.2xlarge" => Ok(Self::MlP32xlarge),
            "ml.p3.8xlarge" => Ok(Self::MlP38xlarge),
            "ml.p3.16xlarge" => Ok(Self::MlP316xlarge),
            "ml.p3dn.24xlarge" => Ok(Self::MlP3dn24xlarge),
            "ml.c5.xlarge" => Ok(Self::MlC5Xlarge),
            "ml.c5.2xlarge" => Ok(Self::MlC52xlarge),
            "ml.c5.4xlarge" => Ok(Self::MlC54xlarge),
            "ml.c5.9xlarge" => Ok(Self::MlC59xlarge),
            "ml.c5.18xlarge" => Ok(Self::MlC518xlarge),
            "ml.c5n.xlarge" => Ok(Self::MlC5nXlarge),
            "ml.c5n.2xlarge" => Ok(Self::MlC5n2xlarge),
            "ml.c5n.4xlarge" => Ok(Self::MlC5n4xlarge),
            "ml.c5n.9xlarge" => Ok(Self::MlC5n9xlarge),
            "ml.c5n.18xlarge" => Ok(Self::MlC5n18xlarge),
            other => Err(SageMakerError::unknown_enum_value("TrainingInstanceType", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_variant_instance_type_round_trip() {
        assert_eq!(ProductionVariantInstanceType::MlM5Large.as_str(), "ml.m5.large");
        assert_eq!(
            "ml.g4dn.12xlarge".parse::<ProductionVariantInstanceType>().unwrap(),
            ProductionVariantInstanceType::MlG4dn12xlarge
        );
        assert_eq!(String::from(ProductionVariantInstanceType::MlInf124xlarge), "ml.inf1.24xlarge");
    }

    #[test]
    fn test_processing_instance_type_round_trip() {
        assert_eq!(ProcessingInstanceType::MlT3Medium.as_str(), "ml.t3.medium");
        assert_eq!(
            "ml.r5.24xlarge".parse::<ProcessingInstanceType>().unwrap(),
            ProcessingInstanceType::MlR524xlarge
        );
    }

    #[test]
    fn test_transform_instance_type_excludes_burstable_families() {
        assert!("ml.t3.medium".parse::<TransformInstanceType>().is_err());
        assert_eq!(
            "ml.m4.10xlarge".parse::<TransformInstanceType>().unwrap(),
            TransformInstanceType::MlM410xlarge
        );
    }

    #[test]
    fn test_accelerator_type_round_trip() {
        assert_eq!(ProductionVariantAcceleratorType::MlEia2Medium.as_str(), "ml.eia2.medium");
        assert!("ml.eia3.medium".parse::<ProductionVariantAcceleratorType>().is_err());
    }

    #[test]
    fn test_training_instance_type_round_trip() {
        assert_eq!(TrainingInstanceType::MlP3dn24xlarge.as_str(), "ml.p3dn.24xlarge");
        assert_eq!(
            "ml.c5n.9xlarge".parse::<TrainingInstanceType>().unwrap(),
            TrainingInstanceType::MlC5n9xlarge,
        );
        assert!("ml.c6i.xlarge".parse::<TrainingInstanceType>().is_err());
    }
}
