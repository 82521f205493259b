use serde::{Deserialize, Serialize};

// 课程标识
//
// 目录固定为 7 门课程，每门课程绑定一个字面量位值。
// 位值写死在 match 里，调整目录顺序不会改变任何课程的编码。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CourseId {
    SoftwareEngineering,  // 软件工程
    MicrocomputerInterface, // 微机接口
    OperatingSystem,      // 操作系统
    AiIntroduction,       // 人工智能导论
    ComputerOrganization, // 组成原理
    NeuralNetwork,        // 神经网络
    BigDataAnalysis,      // 大数据分析
}

impl CourseId {
    pub const SOFTWARE_ENGINEERING: &'static str = "software_engineering";
    pub const MICROCOMPUTER_INTERFACE: &'static str = "microcomputer_interface";
    pub const OPERATING_SYSTEM: &'static str = "operating_system";
    pub const AI_INTRODUCTION: &'static str = "ai_introduction";
    pub const COMPUTER_ORGANIZATION: &'static str = "computer_organization";
    pub const NEURAL_NETWORK: &'static str = "neural_network";
    pub const BIG_DATA_ANALYSIS: &'static str = "big_data_analysis";

    /// 全部课程，顺序即展示顺序
    pub fn all() -> &'static [CourseId; 7] {
        &[
            CourseId::SoftwareEngineering,
            CourseId::MicrocomputerInterface,
            CourseId::OperatingSystem,
            CourseId::AiIntroduction,
            CourseId::ComputerOrganization,
            CourseId::NeuralNetwork,
            CourseId::BigDataAnalysis,
        ]
    }

    /// 课程对应的位值
    pub fn bit(&self) -> u32 {
        match self {
            CourseId::SoftwareEngineering => 1,
            CourseId::MicrocomputerInterface => 2,
            CourseId::OperatingSystem => 4,
            CourseId::AiIntroduction => 8,
            CourseId::ComputerOrganization => 16,
            CourseId::NeuralNetwork => 32,
            CourseId::BigDataAnalysis => 64,
        }
    }

    /// 由单一位值反查课程，未知位返回 None
    pub fn from_bit(bit: u32) -> Option<CourseId> {
        match bit {
            1 => Some(CourseId::SoftwareEngineering),
            2 => Some(CourseId::MicrocomputerInterface),
            4 => Some(CourseId::OperatingSystem),
            8 => Some(CourseId::AiIntroduction),
            16 => Some(CourseId::ComputerOrganization),
            32 => Some(CourseId::NeuralNetwork),
            64 => Some(CourseId::BigDataAnalysis),
            _ => None,
        }
    }

    /// 课程中文名称
    pub fn name(&self) -> &'static str {
        match self {
            CourseId::SoftwareEngineering => "软件工程",
            CourseId::MicrocomputerInterface => "微机接口",
            CourseId::OperatingSystem => "操作系统",
            CourseId::AiIntroduction => "人工智能导论",
            CourseId::ComputerOrganization => "组成原理",
            CourseId::NeuralNetwork => "神经网络",
            CourseId::BigDataAnalysis => "大数据分析",
        }
    }

    /// 课程简介
    pub fn description(&self) -> &'static str {
        match self {
            CourseId::SoftwareEngineering => "软件开发生命周期、项目管理等",
            CourseId::MicrocomputerInterface => "微机原理与接口技术",
            CourseId::OperatingSystem => "进程管理、内存管理、文件系统等",
            CourseId::AiIntroduction => "人工智能基础理论与应用",
            CourseId::ComputerOrganization => "计算机组成原理与体系结构",
            CourseId::NeuralNetwork => "神经网络原理与深度学习",
            CourseId::BigDataAnalysis => "大数据处理技术与分析方法",
        }
    }

    /// 由中文名称反查课程
    pub fn from_name(name: &str) -> Option<CourseId> {
        CourseId::all().iter().copied().find(|c| c.name() == name)
    }
}

impl<'de> Deserialize<'de> for CourseId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课程标识: '{s}'. 支持的课程: software_engineering, microcomputer_interface, operating_system, ai_introduction, computer_organization, neural_network, big_data_analysis"
            ))
        })
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseId::SoftwareEngineering => write!(f, "{}", CourseId::SOFTWARE_ENGINEERING),
            CourseId::MicrocomputerInterface => write!(f, "{}", CourseId::MICROCOMPUTER_INTERFACE),
            CourseId::OperatingSystem => write!(f, "{}", CourseId::OPERATING_SYSTEM),
            CourseId::AiIntroduction => write!(f, "{}", CourseId::AI_INTRODUCTION),
            CourseId::ComputerOrganization => write!(f, "{}", CourseId::COMPUTER_ORGANIZATION),
            CourseId::NeuralNetwork => write!(f, "{}", CourseId::NEURAL_NETWORK),
            CourseId::BigDataAnalysis => write!(f, "{}", CourseId::BIG_DATA_ANALYSIS),
        }
    }
}

impl std::str::FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseId::SOFTWARE_ENGINEERING => Ok(CourseId::SoftwareEngineering),
            CourseId::MICROCOMPUTER_INTERFACE => Ok(CourseId::MicrocomputerInterface),
            CourseId::OPERATING_SYSTEM => Ok(CourseId::OperatingSystem),
            CourseId::AI_INTRODUCTION => Ok(CourseId::AiIntroduction),
            CourseId::COMPUTER_ORGANIZATION => Ok(CourseId::ComputerOrganization),
            CourseId::NEURAL_NETWORK => Ok(CourseId::NeuralNetwork),
            CourseId::BIG_DATA_ANALYSIS => Ok(CourseId::BigDataAnalysis),
            _ => Err(format!("Invalid course id: {s}")),
        }
    }
}

/// 课程目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub bit: u32,
}

impl From<CourseId> for Course {
    fn from(id: CourseId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            bit: id.bit(),
        }
    }
}

impl Course {
    /// 完整课程目录
    pub fn catalogue() -> Vec<Course> {
        CourseId::all().iter().copied().map(Course::from).collect()
    }
}
