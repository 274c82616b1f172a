//! C++ naming conventions.

use gdbind_codegen::NamingConvention;

fn escape_cpp_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Names from `api.json` that collide with C++ keywords.
pub const CPP_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "new", "char", "default", "class", "typename", "operator", "bool", "export", "short",
    ],
    escape_reserved: escape_cpp_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpp_reserved_words() {
        assert!(CPP_NAMING.is_reserved("new"));
        assert!(CPP_NAMING.is_reserved("operator"));
        assert!(!CPP_NAMING.is_reserved("update"));
        assert!(!CPP_NAMING.is_reserved("New"));
    }

    #[test]
    fn test_cpp_escape_reserved() {
        assert_eq!(CPP_NAMING.safe_name("new"), "new_");
        assert_eq!(CPP_NAMING.safe_name("default"), "default_");
        assert_eq!(CPP_NAMING.safe_name("update"), "update");
    }
}
