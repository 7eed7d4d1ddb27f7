//! Accessors added by `has_secure_password`.

use rbs_activemodel_define::ClassDescriptor;

const AUTHENTICATE_PREFIX: &str = "authenticate_";
const CONFIRMATION_SUFFIX: &str = "_confirmation";

/// The attribute name `authenticate` is aliased for.
pub const CANONICAL_PASSWORD: &str = "password";

/// `true` for a name usable as a plain Ruby method identifier.
pub fn is_method_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Base names `X` for which both `authenticate_X` and `X_confirmation` are
/// instance methods, distinct and in first-seen order.
pub fn password_attributes(descriptor: &ClassDescriptor) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for method in &descriptor.instance_methods {
        let Some(base) = method.strip_prefix(AUTHENTICATE_PREFIX) else {
            continue;
        };
        if !is_method_identifier(base) || names.contains(&base) {
            continue;
        }
        if descriptor.has_instance_method(&format!("{base}{CONFIRMATION_SUFFIX}")) {
            names.push(base);
        }
    }
    names
}

fn password_block(name: &str) -> String {
    let mut block = format!(
        "attr_reader {name}: String?\n\
         attr_accessor {name}_confirmation: String\n\
         attr_accessor {name}_challenge: String\n\
         \n\
         def {name}=: (String) -> String\n\
         def {name}_salt: () -> String\n\
         def authenticate_{name}: (String) -> (instance | false)"
    );
    if name == CANONICAL_PASSWORD {
        block.push_str("\n\nalias authenticate authenticate_password");
    }
    block
}

/// Renders one accessor block per password attribute, separated by blank
/// lines. Empty when the class has no secure password support.
pub fn generate_secure_password(descriptor: &ClassDescriptor) -> String {
    if !descriptor.secure_password {
        return String::new();
    }
    password_attributes(descriptor)
        .into_iter()
        .map(password_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_password_gets_alias() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("password")
            .build();
        let out = generate_secure_password(&descriptor);
        assert!(out.starts_with("attr_reader password: String?\n"));
        assert!(out.contains("def authenticate_password: (String) -> (instance | false)"));
        assert!(out.ends_with("\n\nalias authenticate authenticate_password"));
    }

    #[test]
    fn other_names_get_no_alias() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("passphrase")
            .build();
        let out = generate_secure_password(&descriptor);
        assert!(out.contains("attr_accessor passphrase_challenge: String"));
        assert!(out.contains("def passphrase_salt: () -> String"));
        assert!(!out.contains("alias"));
    }

    #[test]
    fn underscored_base_names_are_kept_whole() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("recovery_password")
            .build();
        assert_eq!(password_attributes(&descriptor), vec!["recovery_password"]);
        assert!(!generate_secure_password(&descriptor).contains("alias"));
    }

    #[test]
    fn requires_confirmation_companion() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("password")
            .instance_method("authenticate_token")
            .build();
        assert_eq!(password_attributes(&descriptor), vec!["password"]);
    }

    #[test]
    fn multiple_attributes_in_first_seen_order_without_duplicates() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("pin")
            .has_secure_password("password")
            .instance_method("authenticate_pin")
            .build();
        assert_eq!(password_attributes(&descriptor), vec!["pin", "password"]);

        let out = generate_secure_password(&descriptor);
        let pin = out.find("attr_reader pin:").unwrap();
        let password = out.find("attr_reader password:").unwrap();
        assert!(pin < password);
        assert!(out.contains("(instance | false)\n\nattr_reader password"));
    }

    #[test]
    fn empty_without_capability() {
        let descriptor = ClassDescriptor::builder("User")
            .instance_method("authenticate_password")
            .instance_method("password_confirmation")
            .build();
        assert_eq!(generate_secure_password(&descriptor), "");
    }

    #[test]
    fn ignores_bare_and_malformed_prefixes() {
        let descriptor = ClassDescriptor::builder("User")
            .has_secure_password("password")
            .instance_method("authenticate_")
            .instance_method("_confirmation")
            .instance_method("authenticate_Bad")
            .instance_method("Bad_confirmation")
            .build();
        assert_eq!(password_attributes(&descriptor), vec!["password"]);
    }
}
