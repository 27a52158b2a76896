use crate::api::models::Participant;
use std::collections::HashMap;

/// All participants of one match, as returned on a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchGroup {
    pub match_id: String,
    pub participants: Vec<Participant>,
}

impl MatchGroup {
    pub fn main_participant(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_main_participant)
    }

    /// Everyone except the first main participant, in backend order.
    pub fn others(&self) -> Vec<&Participant> {
        let main_index = self.participants.iter().position(|p| p.is_main_participant);
        self.participants
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != main_index)
            .map(|(_, p)| p)
            .collect()
    }
}

/// Groups participants by match id, keeping the order in which each match
/// first appears.
pub fn group_by_match(participants: Vec<Participant>) -> Vec<MatchGroup> {
    let mut groups: Vec<MatchGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for participant in participants {
        match index.get(&participant.match_id) {
            Some(&slot) => groups[slot].participants.push(participant),
            None => {
                index.insert(participant.match_id.clone(), groups.len());
                groups.push(MatchGroup {
                    match_id: participant.match_id.clone(),
                    participants: vec![participant],
                });
            }
        }
    }

    groups
}

pub fn find_main_participant(groups: &[MatchGroup]) -> Option<&Participant> {
    groups.iter().find_map(MatchGroup::main_participant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(match_id: &str, name: &str, main: bool) -> Participant {
        Participant {
            match_id: match_id.to_string(),
            summoner_name: name.to_string(),
            is_main_participant: main,
            ..Default::default()
        }
    }

    #[test]
    fn groups_follow_first_appearance() {
        let input = vec![
            player("B", "b1", true),
            player("A", "a1", false),
            player("B", "b2", false),
            player("C", "c1", false),
            player("A", "a2", true),
        ];
        let groups = group_by_match(input.clone());

        let ids: Vec<_> = groups.iter().map(|g| g.match_id.as_str()).collect();
        assert_eq!(ids, ["B", "A", "C"]);

        let total: usize = groups.iter().map(|g| g.participants.len()).sum();
        assert_eq!(total, input.len());
        for p in &input {
            let holders = groups
                .iter()
                .filter(|g| g.participants.contains(p))
                .count();
            assert_eq!(holders, 1, "{} must be in exactly one group", p.summoner_name);
        }
        assert_eq!(groups[0].participants[1].summoner_name, "b2");
    }

    #[test]
    fn others_exclude_main_participant() {
        let group = MatchGroup {
            match_id: "A".to_string(),
            participants: vec![
                player("A", "x", false),
                player("A", "me", true),
                player("A", "y", false),
            ],
        };
        assert_eq!(group.main_participant().unwrap().summoner_name, "me");
        let names: Vec<_> = group.others().iter().map(|p| p.summoner_name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn main_participant_is_searched_across_groups() {
        let groups = group_by_match(vec![
            player("A", "a1", false),
            player("B", "b1", true),
        ]);
        assert_eq!(find_main_participant(&groups).unwrap().summoner_name, "b1");
        assert!(groups[0].main_participant().is_none());
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_match(Vec::new()).is_empty());
    }
}
