//! Client-side search over admin tables. Sorting, status and score/date
//! filters run on the backend; the search box narrows what was returned.

use gateway::types::{AdminDocument, AdminUser, Sort, SortOrder};

fn matches(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

pub fn search_users(users: &[AdminUser], needle: &str) -> Vec<AdminUser> {
    users.iter().filter(|u| matches(needle, &[&u.full_name, &u.email])).cloned().collect()
}

pub fn search_documents(documents: &[AdminDocument], needle: &str) -> Vec<AdminDocument> {
    documents
        .iter()
        .filter(|d| matches(needle, &[&d.file_name, &d.user_email]))
        .cloned()
        .collect()
}

/// Arrow shown beside a sortable column header.
pub fn sort_indicator<C: PartialEq>(sort: &Sort<C>, column: &C) -> &'static str {
    if &sort.column != column {
        return "";
    }
    match sort.order {
        SortOrder::Asc => " ▲",
        SortOrder::Desc => " ▼",
    }
}

#[cfg(test)]
mod tests {
    use gateway::types::UserSortColumn;

    use super::*;

    fn user(name: &str, email: &str) -> AdminUser {
        AdminUser { full_name: name.into(), email: email.into(), ..AdminUser::default() }
    }

    fn document(file: &str, email: &str) -> AdminDocument {
        AdminDocument { file_name: file.into(), user_email: email.into(), ..AdminDocument::default() }
    }

    #[test]
    fn users_match_name_or_email_ignoring_case() {
        let users = vec![user("Ada Lovelace", "ada@example.com"), user("Grace Hopper", "grace@navy.mil")];
        assert_eq!(search_users(&users, "LOVE").len(), 1);
        assert_eq!(search_users(&users, "navy")[0].full_name, "Grace Hopper");
        assert_eq!(search_users(&users, "  ").len(), 2);
        assert!(search_users(&users, "turing").is_empty());
    }

    #[test]
    fn documents_match_file_or_owner() {
        let docs = vec![document("Essay.PDF", "ada@example.com"), document("notes.txt", "grace@navy.mil")];
        assert_eq!(search_documents(&docs, "essay")[0].user_email, "ada@example.com");
        assert_eq!(search_documents(&docs, "GRACE")[0].file_name, "notes.txt");
    }

    #[test]
    fn indicator_only_on_active_column() {
        let sort = Sort { column: UserSortColumn::Email, order: SortOrder::Asc };
        assert_eq!(sort_indicator(&sort, &UserSortColumn::Email), " ▲");
        assert_eq!(sort_indicator(&sort, &UserSortColumn::FullName), "");
    }
}
