pub mod errors;
pub mod db;
pub mod validation;
pub mod abbonamento;
pub mod utente;
pub mod fumetto;
pub mod wishlist;
pub mod wishlist_fumetto;
pub mod copia_fumetto;
pub mod asta;
pub mod ordine;
pub mod dettagli_ordine;

#[cfg(test)]
mod tests;
