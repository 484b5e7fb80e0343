use sea_orm::Set;

use models::copia_fumetto::{self, CopiaFumettoInput};

use crate::sea_orm_repository::{ApplyInput, SeaOrmRepository};

pub type SeaOrmCopiaFumettoRepository = SeaOrmRepository<copia_fumetto::Entity, CopiaFumettoInput>;

impl ApplyInput<copia_fumetto::ActiveModel> for CopiaFumettoInput {
    fn apply(self, am: &mut copia_fumetto::ActiveModel) {
        am.stato_copia_fumetto = Set(self.stato_copia_fumetto);
        am.prezzo = Set(self.prezzo);
        am.disponibile = Set(self.disponibile);
        am.fumetto_id = Set(self.fumetto_id);
    }
}
