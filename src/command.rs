use std::fmt;

/// Operation selected by the `command` request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Load,
    Search,
    Delete,
    Add,
    Update,
}

impl Command {
    /// Commands reachable through `GET`. Anything missing or unrecognised lists everyone.
    pub fn for_get(command: Option<&str>) -> Self {
        match command {
            Some("LOAD") => Self::Load,
            Some("SEARCH") => Self::Search,
            Some("DELETE") => Self::Delete,
            _ => Self::List,
        }
    }

    /// Commands reachable through `POST`, which are the ones that write form data.
    pub fn for_post(command: Option<&str>) -> Self {
        match command {
            Some("ADD") => Self::Add,
            Some("UPDATE") => Self::Update,
            _ => Self::List,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "LIST",
            Self::Load => "LOAD",
            Self::Search => "SEARCH",
            Self::Delete => "DELETE",
            Self::Add => "ADD",
            Self::Update => "UPDATE",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_defaults_to_list() {
        assert_eq!(Command::for_get(None), Command::List);
        assert_eq!(Command::for_get(Some("LIST")), Command::List);
        assert_eq!(Command::for_get(Some("")), Command::List);
        assert_eq!(Command::for_get(Some("nonsense")), Command::List);
    }

    #[test]
    fn get_reaches_read_and_delete_commands() {
        assert_eq!(Command::for_get(Some("LOAD")), Command::Load);
        assert_eq!(Command::for_get(Some("SEARCH")), Command::Search);
        assert_eq!(Command::for_get(Some("DELETE")), Command::Delete);
    }

    #[test]
    fn writes_need_post() {
        assert_eq!(Command::for_get(Some("ADD")), Command::List);
        assert_eq!(Command::for_get(Some("UPDATE")), Command::List);
        assert_eq!(Command::for_post(Some("ADD")), Command::Add);
        assert_eq!(Command::for_post(Some("UPDATE")), Command::Update);
    }

    #[test]
    fn post_falls_back_to_list() {
        assert_eq!(Command::for_post(None), Command::List);
        assert_eq!(Command::for_post(Some("DELETE")), Command::List);
        assert_eq!(Command::for_post(Some("LOAD")), Command::List);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Command::for_get(Some("load")), Command::List);
        assert_eq!(Command::for_post(Some("add")), Command::List);
    }

    #[test]
    fn names_parse_back_to_themselves() {
        for command in [Command::Load, Command::Search, Command::Delete] {
            assert_eq!(Command::for_get(Some(command.as_str())), command);
        }
        for command in [Command::Add, Command::Update] {
            assert_eq!(Command::for_post(Some(&command.to_string())), command);
        }
    }
}
