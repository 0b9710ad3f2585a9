use crate::core::JournalManager;
use crate::errors::Result;

/// Whether the form is capturing a new entry or editing a selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Editing(usize),
}

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was appended, carrying its assigned id.
    Added(u64),
    /// The entry at this position was updated in place.
    Updated(usize),
    /// An amount draft was empty or unparseable; nothing happened.
    Rejected,
}

/// Mediates between raw user intents and journal mutations.
///
/// Owns the two amount drafts and the selection cursor. The note draft is
/// the journal-wide note itself: selecting an entry overwrites it and edits
/// write through immediately, matching the single shared note field of the
/// app this models.
#[derive(Debug, Default)]
pub struct EntryForm {
    income: String,
    expense: String,
    selection: Option<usize>,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        match self.selection {
            Some(position) => FormMode::Editing(position),
            None => FormMode::Idle,
        }
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn income(&self) -> &str {
        &self.income
    }

    pub fn expense(&self) -> &str {
        &self.expense
    }

    /// Amount drafts accept only numeric text; anything else is dropped.
    pub fn set_income(&mut self, raw: &str) {
        self.income = digits_of(raw);
    }

    pub fn set_expense(&mut self, raw: &str) {
        self.expense = digits_of(raw);
    }

    /// Selects the entry at `position` and loads its values into the drafts,
    /// including the shared note.
    pub fn select(&mut self, manager: &mut JournalManager, position: usize) -> Result<()> {
        let (income, expense, note) = {
            let entry = manager
                .journal()
                .get(position)
                .ok_or(crate::errors::JournalError::OutOfRange {
                    position,
                    len: manager.journal().len(),
                })?;
            (entry.income, entry.expense, entry.note.clone())
        };
        manager.set_note(note)?;
        self.income = income.to_string();
        self.expense = expense.to_string();
        self.selection = Some(position);
        Ok(())
    }

    /// Clears the selection without touching the journal. Drafts are kept so
    /// half-typed input survives an accidental deselect.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Commits the drafts: appends while idle, updates the selected entry
    /// while editing. Empty amount drafts reject the submit with no state
    /// change and no journal call.
    pub fn submit(&mut self, manager: &mut JournalManager) -> Result<SubmitOutcome> {
        let (income, expense) = match (self.income.parse::<u64>(), self.expense.parse::<u64>()) {
            (Ok(income), Ok(expense)) => (income, expense),
            _ => return Ok(SubmitOutcome::Rejected),
        };
        let note = manager.journal().note().to_string();

        match self.selection {
            None => {
                let entry = manager.append(income, expense, note)?;
                self.reset_amounts();
                Ok(SubmitOutcome::Added(entry.id))
            }
            Some(position) => {
                manager.update_at(position, income, expense, note)?;
                self.reset_amounts();
                self.selection = None;
                Ok(SubmitOutcome::Updated(position))
            }
        }
    }

    /// Deletes the selected entry. Without a selection there is nothing to
    /// delete and the call is a no-op.
    pub fn delete(&mut self, manager: &mut JournalManager) -> Result<bool> {
        let Some(position) = self.selection else {
            return Ok(false);
        };
        manager.remove_at(position)?;
        self.reset_amounts();
        self.selection = None;
        Ok(true)
    }

    fn reset_amounts(&mut self) {
        self.income.clear();
        self.expense.clear();
    }
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::LocaleConfig;
    use crate::storage::MemoryStore;

    fn manager() -> JournalManager {
        JournalManager::load(Box::new(MemoryStore::new()), LocaleConfig::indonesian()).unwrap()
    }

    fn filled_form(income: &str, expense: &str) -> EntryForm {
        let mut form = EntryForm::new();
        form.set_income(income);
        form.set_expense(expense);
        form
    }

    #[test]
    fn submit_while_idle_appends_and_keeps_note() {
        let mut manager = manager();
        manager.set_note("Makan siang").unwrap();
        let mut form = filled_form("5000", "2000");

        let outcome = form.submit(&mut manager).unwrap();
        assert_eq!(outcome, SubmitOutcome::Added(1));
        assert_eq!(form.mode(), FormMode::Idle);
        assert!(form.income().is_empty() && form.expense().is_empty());
        // The note doubles as the default for the next entry, so it stays.
        assert_eq!(manager.journal().note(), "Makan siang");
        assert_eq!(manager.journal().get(0).unwrap().note, "Makan siang");
    }

    #[test]
    fn submit_with_empty_amount_is_rejected_without_mutation() {
        let mut manager = manager();
        let mut form = filled_form("5000", "");

        let outcome = form.submit(&mut manager).unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(manager.journal().is_empty());
        // Drafts are untouched by a rejected submit.
        assert_eq!(form.income(), "5000");
    }

    #[test]
    fn select_loads_drafts_and_overwrites_note() {
        let mut manager = manager();
        manager.append(5000, 2000, "Makan siang").unwrap();
        manager.set_note("Catatan lain").unwrap();
        let mut form = EntryForm::new();

        form.select(&mut manager, 0).unwrap();
        assert_eq!(form.mode(), FormMode::Editing(0));
        assert_eq!(form.income(), "5000");
        assert_eq!(form.expense(), "2000");
        assert_eq!(manager.journal().note(), "Makan siang");
    }

    #[test]
    fn submit_while_editing_updates_and_returns_to_idle() {
        let mut manager = manager();
        manager.append(5000, 2000, "Makan siang").unwrap();
        manager.append(3000, 1000, "Jajan").unwrap();
        let mut form = EntryForm::new();
        form.select(&mut manager, 0).unwrap();
        form.set_income("5500");

        let outcome = form.submit(&mut manager).unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(0));
        assert_eq!(form.mode(), FormMode::Idle);
        assert!(form.income().is_empty() && form.expense().is_empty());

        let entry = manager.journal().get(0).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.income, 5500);
        assert_eq!(entry.expense, 2000);
        assert_eq!(entry.note, "Makan siang");
    }

    #[test]
    fn delete_removes_selection_and_resets() {
        let mut manager = manager();
        manager.append(5000, 2000, "Makan siang").unwrap();
        manager.append(3000, 1000, "Jajan").unwrap();
        let mut form = EntryForm::new();
        form.select(&mut manager, 1).unwrap();

        assert!(form.delete(&mut manager).unwrap());
        assert_eq!(form.mode(), FormMode::Idle);
        assert!(form.income().is_empty() && form.expense().is_empty());
        assert_eq!(manager.journal().len(), 1);
        assert_eq!(manager.journal().get(0).unwrap().id, 1);
    }

    #[test]
    fn delete_while_idle_is_a_noop() {
        let mut manager = manager();
        manager.append(1, 1, "a").unwrap();
        let mut form = EntryForm::new();

        assert!(!form.delete(&mut manager).unwrap());
        assert_eq!(manager.journal().len(), 1);
    }

    #[test]
    fn amount_drafts_keep_digits_only() {
        let mut form = EntryForm::new();
        form.set_income("5a0b00 ");
        form.set_expense("-2.000");
        assert_eq!(form.income(), "5000");
        assert_eq!(form.expense(), "2000");
    }
}
