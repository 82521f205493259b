pub mod expand;
pub mod template;
pub mod validate;

pub use expand::expand;
pub use template::{Placeholder, Token, ensure_valid_rule, has_placeholder, tokenize};
pub use validate::{ValidationOutcome, validate};

use crate::models::users::entities::StudentProfile;

/// 占位符展开上下文
///
/// 单次校验期间不可变，班级名需在构造前由班级表解析完成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingContext {
    pub student_id: String,
    pub class_name: String,
    pub full_name: String,
}

impl NamingContext {
    pub fn new(
        student_id: impl Into<String>,
        class_name: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            class_name: class_name.into(),
            full_name: full_name.into(),
        }
    }

    /// 由用户资料和已解析的班级名构造
    pub fn from_profile(profile: &StudentProfile, class_name: &str) -> Self {
        Self::new(
            profile.student_id.clone(),
            class_name,
            profile.full_name.clone(),
        )
    }

    /// 由用户资料构造，班级代码经本地缓存解析
    pub fn resolve(profile: &StudentProfile, cache: &crate::cache::LocalCache) -> Self {
        Self::from_profile(profile, &cache.resolve_class_name(&profile.class_code))
    }

    pub(crate) fn field(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::StudentId => &self.student_id,
            Placeholder::ClassName => &self.class_name,
            Placeholder::FullName => &self.full_name,
        }
    }
}

/// 命名服务
pub struct NamingService;

impl NamingService {
    /// 校验命名规则是否含有可识别占位符（授权边界调用）
    pub fn ensure_valid_rule(template: &str) -> crate::errors::Result<()> {
        template::ensure_valid_rule(template)
    }

    /// 展开期望文件名
    pub fn expand(template: &str, context: &NamingContext) -> String {
        expand::expand(template, context)
    }

    /// 校验候选文件名
    pub fn validate(template: &str, context: &NamingContext, candidate: &str) -> ValidationOutcome {
        validate::validate(template, context, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LocalCache;
    use crate::models::courses::selection::CourseSelection;
    use crate::models::users::entities::UserRole;

    fn profile(class_code: &str) -> StudentProfile {
        StudentProfile {
            student_id: "20230001".to_string(),
            class_code: class_code.to_string(),
            full_name: "张三".to_string(),
            role: UserRole::Student,
            courses: CourseSelection::none(),
        }
    }

    #[test]
    fn test_resolve_maps_class_code_through_cache() {
        let cache = LocalCache::new(true);
        let context = NamingContext::resolve(&profile("1234"), &cache);
        assert_eq!(context.class_name, "计科23-1");
        assert_eq!(context.student_id, "20230001");
        assert_eq!(context.full_name, "张三");
    }

    #[test]
    fn test_resolve_unknown_code_keeps_raw_code() {
        let cache = LocalCache::new(true);
        let context = NamingContext::resolve(&profile("9999"), &cache);
        assert_eq!(context.class_name, "9999");
    }
}
