use crate::response::TicketResult;

/// Ticket results keyed by ticket number, in the order tickets first appeared.
///
/// Inserting a ticket that is already present replaces its rows but keeps
/// its original position.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    entries: Vec<(String, TicketResult)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ticket: String, rows: TicketResult) {
        match self.entries.iter_mut().find(|(t, _)| *t == ticket) {
            Some((_, existing)) => *existing = rows,
            None => self.entries.push((ticket, rows)),
        }
    }

    pub fn get(&self, ticket: &str) -> Option<&TicketResult> {
        self.entries
            .iter()
            .find(|(t, _)| t == ticket)
            .map(|(_, rows)| rows)
    }

    /// Ticket numbers in display order.
    pub fn tickets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TicketResult)> {
        self.entries.iter().map(|(t, rows)| (t.as_str(), rows))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ResponseCategory, ResponseRow};

    fn row(member: &str) -> ResponseRow {
        ResponseRow {
            member: member.to_string(),
            description: "desc".to_string(),
            response: "20".to_string(),
            operator_id: "op".to_string(),
            category: ResponseCategory::Green,
        }
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut set = ResultSet::new();
        set.insert("b".to_string(), vec![]);
        set.insert("a".to_string(), vec![row("m")]);

        assert_eq!(set.tickets().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut set = ResultSet::new();
        set.insert("1".to_string(), vec![row("first")]);
        set.insert("2".to_string(), vec![]);
        set.insert("1".to_string(), vec![row("second")]);

        assert_eq!(set.tickets().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(set.get("1").unwrap()[0].member, "second");
    }

    #[test]
    fn test_empty_set() {
        let set = ResultSet::new();
        assert!(set.is_empty());
        assert!(set.get("1").is_none());
    }
}
