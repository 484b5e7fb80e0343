use sea_orm::Set;

use models::asta::{self, AstaInput};

use crate::sea_orm_repository::{ApplyInput, SeaOrmRepository};

pub type SeaOrmAstaRepository = SeaOrmRepository<asta::Entity, AstaInput>;

impl ApplyInput<asta::ActiveModel> for AstaInput {
    fn apply(self, am: &mut asta::ActiveModel) {
        am.data_inizio = Set(self.data_inizio);
        am.data_fine = Set(self.data_fine);
        am.offerta_corrente = Set(self.offerta_corrente);
        am.stato_asta = Set(self.stato_asta);
        am.copia_fumetto_id = Set(self.copia_fumetto_id);
        am.utente_migliore_offerta_id = Set(self.utente_migliore_offerta_id);
    }
}
