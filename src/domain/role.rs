use std::fmt;
use std::str::FromStr;

/// ロール - エンドポイントへのアクセスを制御する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 司書
    Librarian,
    /// 管理者
    Admin,
}

impl Role {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Librarian => "ROLE_LIBRARIAN",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ROLE_` 接頭辞の有無、大文字小文字を問わずにパースする
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "LIBRARIAN" => Ok(Role::Librarian),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// 認証済みの呼び出し元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            subject: subject.into(),
            roles,
        }
    }

    /// ロール名の列から生成する。未知のロール名は無視される。
    pub fn from_role_names<I, S>(subject: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = names
            .into_iter()
            .filter_map(|name| name.as_ref().parse::<Role>().ok())
            .collect();
        Self::new(subject, roles)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// 認可エラー：要求ロールのいずれも持っていない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRole {
    pub required: &'static [Role],
}

/// 認可の述語
///
/// 呼び出し元が要求ロールのいずれか1つを持っていれば許可する。
/// 要求ロールが空の場合は常に拒否する。
pub fn authorize(required: &'static [Role], caller: &[Role]) -> Result<(), MissingRole> {
    if required.iter().any(|role| caller.contains(role)) {
        Ok(())
    } else {
        Err(MissingRole { required })
    }
}

/// エンドポイントごとのアクセスポリシー
pub trait AccessPolicy: Send + Sync + 'static {
    const REQUIRED: &'static [Role];
}

/// 司書のみ
pub struct LibrarianOnly;

impl AccessPolicy for LibrarianOnly {
    const REQUIRED: &'static [Role] = &[Role::Librarian];
}

/// 司書または管理者
pub struct LibrarianOrAdmin;

impl AccessPolicy for LibrarianOrAdmin {
    const REQUIRED: &'static [Role] = &[Role::Librarian, Role::Admin];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_with_and_without_prefix() {
        assert_eq!("ROLE_LIBRARIAN".parse::<Role>(), Ok(Role::Librarian));
        assert_eq!("librarian".parse::<Role>(), Ok(Role::Librarian));
        assert_eq!("role_admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn test_role_parse_unknown() {
        assert!("ROLE_PATRON".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_principal_ignores_unknown_role_names() {
        let principal = Principal::from_role_names("ana", ["ROLE_LIBRARIAN", "ROLE_PATRON"]);
        assert_eq!(principal.roles, vec![Role::Librarian]);
        assert!(principal.has_role(Role::Librarian));
        assert!(!principal.has_role(Role::Admin));
    }

    #[test]
    fn test_librarian_only() {
        assert!(authorize(LibrarianOnly::REQUIRED, &[Role::Librarian]).is_ok());
        assert!(authorize(LibrarianOnly::REQUIRED, &[Role::Admin]).is_err());
        assert!(authorize(LibrarianOnly::REQUIRED, &[]).is_err());
    }

    #[test]
    fn test_librarian_or_admin() {
        assert!(authorize(LibrarianOrAdmin::REQUIRED, &[Role::Librarian]).is_ok());
        assert!(authorize(LibrarianOrAdmin::REQUIRED, &[Role::Admin]).is_ok());
        assert!(authorize(LibrarianOrAdmin::REQUIRED, &[Role::Admin, Role::Librarian]).is_ok());
        assert!(authorize(LibrarianOrAdmin::REQUIRED, &[]).is_err());
    }

    #[test]
    fn test_empty_requirement_denies() {
        let err = authorize(&[], &[Role::Librarian, Role::Admin]).unwrap_err();
        assert!(err.required.is_empty());
    }
}
