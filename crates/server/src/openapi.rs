//! OpenAPI document. Health is described by its handler annotation; the
//! record resources share generic handlers, so their operations are
//! assembled here from `ResourcePaths`.
use serde::Serialize;
use utoipa::openapi::path::{
    OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem, PathItemType, Paths, PathsBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, Ref, Schema, SchemaFormat, SchemaType};
use utoipa::openapi::RefOr;
use utoipa::openapi::{ContentBuilder, Required, ResponseBuilder};
use utoipa::{OpenApi, ToSchema};

use crate::routes::resource::{
    ResourcePaths, ABBONAMENTI, ASTE, COPIE_FUMETTO, DETTAGLI_ORDINI, FUMETTI, ORDINI, UTENTI, WISHLISTS,
};
use crate::routes::wishlists::{ADD_ITEM_PATH, REMOVE_ITEM_PATH};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuoloUtenteDoc {
    Admin,
    Cliente,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoriaFumettoDoc {
    Fantasy,
    Fantascienza,
    Horror,
    Supereroi,
    Sportivo,
    Scolastico,
    Romantico,
    Azione,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtenteDoc {
    pub utente_id: i32,
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub indirizzo: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub data_registrazione: String,
    pub ruolo_utente: RuoloUtenteDoc,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_inizio_abbonamento: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_fine_abbonamento: Option<String>,
    pub abbonamento_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UtenteInputDoc {
    pub nome: String,
    pub cognome: String,
    pub email: String,
    pub password: String,
    pub indirizzo: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub data_registrazione: String,
    pub ruolo_utente: RuoloUtenteDoc,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_inizio_abbonamento: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_fine_abbonamento: Option<String>,
    pub abbonamento_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FumettoDoc {
    pub fumetto_id: i32,
    pub titolo: String,
    pub autore: String,
    pub editore: String,
    pub descrizione: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub data_pubblicazione: String,
    pub disponibile_per_asta: bool,
    pub categoria_fumetto: CategoriaFumettoDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FumettoInputDoc {
    pub titolo: String,
    pub autore: String,
    pub editore: String,
    pub descrizione: Option<String>,
    #[schema(value_type = String, format = Date)]
    pub data_pubblicazione: String,
    pub disponibile_per_asta: Option<bool>,
    pub categoria_fumetto: CategoriaFumettoDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDoc {
    pub wishlist_id: i32,
    #[schema(value_type = String, format = Date)]
    pub data_creazione: String,
    pub utente_id: Option<i32>,
    pub fumetti: Vec<FumettoDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FumettoRefDoc {
    pub fumetto_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistInputDoc {
    #[schema(value_type = String, format = Date)]
    pub data_creazione: String,
    pub utente_id: Option<i32>,
    pub fumetti: Option<Vec<FumettoRefDoc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PianoAbbonamentoDoc {
    Mensile,
    Trimestrale,
    Semestrale,
    Annuale,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoCopiaFumettoDoc {
    Nuovo,
    Usato,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoAstaDoc {
    InCorso,
    Conclusa,
    Annullata,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatoOrdineDoc {
    Consegnato,
    Annullato,
    InConsegna,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbbonamentoDoc {
    pub abbonamento_id: i32,
    pub piano_abbonamento: PianoAbbonamentoDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbbonamentoInputDoc {
    pub piano_abbonamento: PianoAbbonamentoDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CopiaFumettoDoc {
    pub copia_fumetto_id: i32,
    pub stato_copia_fumetto: StatoCopiaFumettoDoc,
    pub prezzo: f64,
    pub disponibile: bool,
    pub fumetto_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CopiaFumettoInputDoc {
    pub stato_copia_fumetto: StatoCopiaFumettoDoc,
    pub prezzo: f64,
    pub disponibile: Option<bool>,
    pub fumetto_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstaDoc {
    pub asta_id: i32,
    #[schema(value_type = String, format = Date)]
    pub data_inizio: String,
    #[schema(value_type = String, format = Date)]
    pub data_fine: String,
    pub offerta_corrente: f64,
    pub stato_asta: StatoAstaDoc,
    pub copia_fumetto_id: i32,
    pub utente_migliore_offerta_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstaInputDoc {
    #[schema(value_type = String, format = Date)]
    pub data_inizio: String,
    #[schema(value_type = String, format = Date)]
    pub data_fine: String,
    pub offerta_corrente: f64,
    pub stato_asta: StatoAstaDoc,
    pub copia_fumetto_id: i32,
    pub utente_migliore_offerta_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdineDoc {
    pub ordine_id: i32,
    pub prezzo_finale: f64,
    #[schema(value_type = String, format = Date)]
    pub data_ordine: String,
    pub stato_ordine: StatoOrdineDoc,
    pub utente_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdineInputDoc {
    pub prezzo_finale: f64,
    #[schema(value_type = String, format = Date)]
    pub data_ordine: String,
    pub stato_ordine: StatoOrdineDoc,
    pub utente_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DettagliOrdineDoc {
    pub dettagli_ordine_id: i32,
    pub quantita_fumetti: i32,
    pub copia_fumetto_id: i32,
    pub ordine_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DettagliOrdineInputDoc {
    pub quantita_fumetti: i32,
    pub copia_fumetto_id: i32,
    pub ordine_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health),
    components(schemas(
        HealthResponse,
        RuoloUtenteDoc,
        CategoriaFumettoDoc,
        UtenteDoc,
        UtenteInputDoc,
        FumettoDoc,
        FumettoInputDoc,
        WishlistDoc,
        FumettoRefDoc,
        WishlistInputDoc,
        PianoAbbonamentoDoc,
        StatoCopiaFumettoDoc,
        StatoAstaDoc,
        StatoOrdineDoc,
        AbbonamentoDoc,
        AbbonamentoInputDoc,
        CopiaFumettoDoc,
        CopiaFumettoInputDoc,
        AstaDoc,
        AstaInputDoc,
        OrdineDoc,
        OrdineInputDoc,
        DettagliOrdineDoc,
        DettagliOrdineInputDoc,
    )),
    tags(
        (name = "health"),
        (name = "utenti"),
        (name = "fumetti"),
        (name = "wishlists"),
        (name = "abbonamenti"),
        (name = "copieFumetto"),
        (name = "aste"),
        (name = "ordini"),
        (name = "dettagliOrdini")
    )
)]
pub struct ApiDoc;

/// Full document: derived part plus the record and item operations.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let sections = [
        (UTENTI, "UtenteDoc", "UtenteInputDoc"),
        (FUMETTI, "FumettoDoc", "FumettoInputDoc"),
        (WISHLISTS, "WishlistDoc", "WishlistInputDoc"),
        (ABBONAMENTI, "AbbonamentoDoc", "AbbonamentoInputDoc"),
        (COPIE_FUMETTO, "CopiaFumettoDoc", "CopiaFumettoInputDoc"),
        (ASTE, "AstaDoc", "AstaInputDoc"),
        (ORDINI, "OrdineDoc", "OrdineInputDoc"),
        (DETTAGLI_ORDINI, "DettagliOrdineDoc", "DettagliOrdineInputDoc"),
    ];
    for (paths, record, input) in sections {
        doc.paths.paths.extend(resource_paths(paths, record, input).paths);
    }
    doc.paths.paths.extend(item_paths().paths);
    doc
}

/// `:id` segments become `{id}` in the document.
fn doc_path(route: &str) -> String {
    route
        .split('/')
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => seg.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn int_param(name: &str) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::Integer)
                .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32)))
                .build(),
        ))))
        .build()
}

fn json_body(schema: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content("application/json", ContentBuilder::new().schema(Ref::from_schema_name(schema)).build())
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, schema: RefOr<Schema>) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content("application/json", ContentBuilder::new().schema(schema).build())
        .build()
}

fn text_response(description: &str) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "text/plain",
            ContentBuilder::new().schema(RefOr::T(Schema::Object(ObjectBuilder::new().schema_type(SchemaType::String).build()))).build(),
        )
        .build()
}

fn bare_response(description: &str) -> utoipa::openapi::Response {
    ResponseBuilder::new().description(description).build()
}

fn resource_paths(paths: ResourcePaths, record: &str, input: &str) -> Paths {
    let tag = paths.tag;
    let one = || RefOr::Ref(Ref::from_schema_name(record));
    let many = || RefOr::T(Schema::Array(ArrayBuilder::new().items(Ref::from_schema_name(record)).build()));

    let create = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("create_{}", paths.name)))
        .request_body(Some(json_body(input)))
        .response("201", json_response("Created", one()))
        .response("400", bare_response("Validation Error"))
        .response("500", bare_response("Create Failed"));
    let list = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("list_{}", paths.name)))
        .response("200", json_response("OK", many()));
    let find = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("find_{}_by_id", paths.name)))
        .parameter(int_param("id"))
        .response("200", json_response("OK", one()))
        .response("404", bare_response("Not Found"));
    let delete = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("delete_{}", paths.name)))
        .parameter(int_param("id"))
        .response("200", text_response("Deleted"))
        .response("404", text_response("Not Found"));
    let update = OperationBuilder::new()
        .tag(tag)
        .operation_id(Some(format!("update_{}", paths.name)))
        .parameter(int_param("id"))
        .request_body(Some(json_body(input)))
        .response("200", json_response("Updated", one()))
        .response("400", bare_response("Validation Error"))
        .response("404", bare_response("Not Found"))
        .response("409", bare_response("Conflict"));

    PathsBuilder::new()
        .path(doc_path(paths.create), PathItem::new(PathItemType::Post, create.build()))
        .path(doc_path(paths.list), PathItem::new(PathItemType::Get, list.build()))
        .path(doc_path(paths.find), PathItem::new(PathItemType::Get, find.build()))
        .path(doc_path(paths.delete), PathItem::new(PathItemType::Delete, delete.build()))
        .path(doc_path(paths.update), PathItem::new(PathItemType::Put, update.build()))
        .build()
}

fn item_paths() -> Paths {
    let item_op = |op_id: &str| {
        OperationBuilder::new()
            .tag("wishlists")
            .operation_id(Some(op_id))
            .parameter(int_param("id"))
            .parameter(int_param("fumetto_id"))
            .response("200", json_response("OK", RefOr::Ref(Ref::from_schema_name("WishlistDoc"))))
            .response("404", bare_response("Not Found"))
    };
    PathsBuilder::new()
        .path(doc_path(ADD_ITEM_PATH), PathItem::new(PathItemType::Post, item_op("add_fumetto").build()))
        .path(doc_path(REMOVE_ITEM_PATH), PathItem::new(PathItemType::Delete, item_op("remove_fumetto").build()))
        .build()
}
