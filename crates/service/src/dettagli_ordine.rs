use sea_orm::Set;

use models::dettagli_ordine::{self, DettagliOrdineInput};

use crate::sea_orm_repository::{ApplyInput, SeaOrmRepository};

pub type SeaOrmDettagliOrdineRepository = SeaOrmRepository<dettagli_ordine::Entity, DettagliOrdineInput>;

impl ApplyInput<dettagli_ordine::ActiveModel> for DettagliOrdineInput {
    fn apply(self, am: &mut dettagli_ordine::ActiveModel) {
        am.quantita_fumetti = Set(self.quantita_fumetti);
        am.copia_fumetto_id = Set(self.copia_fumetto_id);
        am.ordine_id = Set(self.ordine_id);
    }
}
