use std::borrow::Cow;

use convert_case::{Case, Casing};

use crate::model::{Var, MAX_SYNTHESIZED_NAMES};

// golint's list of words Go spells in a single case
const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

fn letter(index: usize) -> char {
    assert!(
        index < MAX_SYNTHESIZED_NAMES,
        "no letter left for position {}; InterfaceDesc::validate should have caught this",
        index
    );
    char::from(b'a' + index as u8)
}

/// Name a parameter is bound to in generated code: its declared name,
/// or `aParam`, `bParam`, ... from its position.
pub fn param_name(param: &Var, index: usize) -> Cow<'_, str> {
    if param.is_anonymous() {
        Cow::Owned(format!("{}Param", letter(index)))
    } else {
        Cow::Borrowed(&param.name)
    }
}

/// Local holding a result in a mocked method: its declared name, or
/// `_ra0`, `_rb1`, ... from its position.
pub fn result_name(result: &Var, index: usize) -> Cow<'_, str> {
    if result.is_anonymous() {
        Cow::Owned(format!("_r{}{}", letter(index), index))
    } else {
        Cow::Borrowed(&result.name)
    }
}

/// Positional name for the `index`th argument of `TypedReturns`.
pub fn return_arg_name(index: usize) -> char {
    letter(index)
}

fn words(name: &str) -> Vec<String> {
    name.to_case(Case::Snake)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

fn capitalize(word: &str) -> String {
    let upper = word.to_uppercase();
    if INITIALISMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `UserID` -> `userID`, `HTTPClient` -> `httpClient`.
pub fn go_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `userId` -> `UserID`, `store` -> `Store`.
pub fn go_pascal(name: &str) -> String {
    words(name).iter().map(|word| capitalize(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDesc;

    #[test]
    fn synthesized_param_names() {
        let anon = Var::anonymous(TypeDesc::primitive("int"));
        assert_eq!(param_name(&anon, 0), "aParam");
        assert_eq!(param_name(&anon, 1), "bParam");
        assert_eq!(param_name(&anon, 25), "zParam");
    }

    #[test]
    fn blank_identifier_is_anonymous() {
        let blank = Var::new("_", TypeDesc::primitive("int"));
        assert_eq!(param_name(&blank, 2), "cParam");
    }

    #[test]
    fn declared_names_are_kept() {
        let key = Var::new("key", TypeDesc::primitive("string"));
        assert_eq!(param_name(&key, 4), "key");
        assert_eq!(result_name(&key, 4), "key");
    }

    #[test]
    fn synthesized_result_names() {
        let anon = Var::anonymous(TypeDesc::error());
        assert_eq!(result_name(&anon, 0), "_ra0");
        assert_eq!(result_name(&anon, 1), "_rb1");
    }

    #[test]
    #[should_panic]
    fn no_twenty_seventh_letter() {
        param_name(&Var::anonymous(TypeDesc::primitive("int")), 26);
    }

    #[test]
    fn casing() {
        assert_eq!(go_camel("Store"), "store");
        assert_eq!(go_pascal("Store"), "Store");
        assert_eq!(go_camel("KeyValueStore"), "keyValueStore");
        assert_eq!(go_pascal("keyValueStore"), "KeyValueStore");
        assert_eq!(go_camel("HTTPClient"), "httpClient");
        assert_eq!(go_pascal("httpClient"), "HTTPClient");
        assert_eq!(go_camel("UserID"), "userID");
        assert_eq!(go_pascal("userId"), "UserID");
    }
}
