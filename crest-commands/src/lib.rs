pub mod roles;

use crest_core::{Data, Error};

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![roles::roleicon::roleicon()]
}

#[cfg(test)]
mod tests {
    use super::commands;

    #[test]
    fn only_roleicon_is_registered() {
        let commands = commands();
        let names: Vec<&str> = commands.iter().map(|command| command.name.as_str()).collect();
        assert_eq!(names, vec!["roleicon"]);
    }

    #[test]
    fn roleicon_keeps_its_short_aliases() {
        let commands = commands();
        let aliases: Vec<&str> = commands[0].aliases.iter().map(String::as_str).collect();
        assert_eq!(aliases, vec!["seticon", "ri"]);
    }
}
