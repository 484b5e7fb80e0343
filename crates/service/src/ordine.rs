use sea_orm::Set;

use models::ordine::{self, OrdineInput};

use crate::sea_orm_repository::{ApplyInput, SeaOrmRepository};

/// Orders; their lines go with them at the storage level.
pub type SeaOrmOrdineRepository = SeaOrmRepository<ordine::Entity, OrdineInput>;

impl ApplyInput<ordine::ActiveModel> for OrdineInput {
    fn apply(self, am: &mut ordine::ActiveModel) {
        am.prezzo_finale = Set(self.prezzo_finale);
        am.data_ordine = Set(self.data_ordine);
        am.stato_ordine = Set(self.stato_ordine);
        am.utente_id = Set(self.utente_id);
    }
}
