#[cfg(test)]
use mockall::automock;

use crate::domain::identity::IdentityRecord;

#[cfg_attr(test, automock)]
pub trait UsernameFormatter {
    fn format_display_name(&self, identity: &IdentityRecord) -> String;
}

/// Formats `{name}_{surname}_{external_uid}` with everything that is not
/// an ASCII letter or digit stripped from the name parts. The external
/// uid keeps the result unique even when stripped names collide.
pub struct AlphanumericUsernameFormatter;

impl UsernameFormatter for AlphanumericUsernameFormatter {
    fn format_display_name(&self, identity: &IdentityRecord) -> String {
        let name = strip_non_alphanumeric(&identity.name);
        let surname = strip_non_alphanumeric(&identity.surname);

        format!("{name}_{surname}_{}", identity.external_uid)
    }
}

fn strip_non_alphanumeric(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod test {
    use super::{AlphanumericUsernameFormatter, UsernameFormatter};
    use crate::domain::identity::IdentityRecord;

    fn identity(name: &str, surname: &str, external_uid: &str) -> IdentityRecord {
        IdentityRecord::builder()
            .external_uid(external_uid)
            .email("john.doe@example.com")
            .name(name)
            .surname(surname)
            .build()
    }

    #[test]
    fn when_name_parts_contain_punctuation_then_formatter_strips_it() {
        let display_name = AlphanumericUsernameFormatter.format_display_name(&identity("Jo-hn", "O'Brien", "42"));

        assert_eq!(display_name, "John_OBrien_42");
    }

    #[test]
    fn when_name_parts_are_empty_then_formatter_still_appends_the_external_uid() {
        let display_name = AlphanumericUsernameFormatter.format_display_name(&identity("", "", "usr-1234"));

        assert_eq!(display_name, "__usr-1234");
    }

    #[test]
    fn when_name_parts_contain_non_ascii_letters_then_formatter_drops_them() {
        let display_name = AlphanumericUsernameFormatter.format_display_name(&identity("Łukasz", "Müller", "usr-9"));

        assert_eq!(display_name, "ukasz_Mller_usr-9");
    }
}
