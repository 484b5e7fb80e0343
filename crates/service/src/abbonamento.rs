use sea_orm::Set;

use models::abbonamento::{self, AbbonamentoInput};

use crate::sea_orm_repository::{ApplyInput, SeaOrmRepository};

/// Subscription plans. Removing a plan leaves its subscribers without one.
pub type SeaOrmAbbonamentoRepository = SeaOrmRepository<abbonamento::Entity, AbbonamentoInput>;

impl ApplyInput<abbonamento::ActiveModel> for AbbonamentoInput {
    fn apply(self, am: &mut abbonamento::ActiveModel) {
        am.piano_abbonamento = Set(self.piano_abbonamento);
    }
}
