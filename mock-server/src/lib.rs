//! In-process stand-in for the IBGE localidades API.
//!
//! Serves the two lookup routes the client talks to, backed by a
//! read-only directory of real reference data: all 27 federative units
//! and a handful of districts. Unknown lookups answer 404. The live
//! service answers those leniently with 200 and an empty result; the mock
//! answers 404 so tests can observe a non-success status end to end.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Regiao {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Estado {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
    pub regiao: Regiao,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Municipio {
    pub id: u32,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Distrito {
    pub id: u32,
    pub nome: String,
    pub municipio: Municipio,
}

/// The seeded reference data. Built once at startup, never mutated.
pub struct Localidades {
    estados: Vec<Estado>,
    distritos: Vec<Distrito>,
}

impl Localidades {
    /// Look up a federative unit by sigla (case-insensitive) or by its
    /// numeric IBGE code, the two keys the live service accepts.
    pub fn estado(&self, key: &str) -> Option<&Estado> {
        if let Ok(id) = key.parse::<u32>() {
            return self.estados.iter().find(|e| e.id == id);
        }
        self.estados
            .iter()
            .find(|e| e.sigla.eq_ignore_ascii_case(key))
    }

    pub fn distrito(&self, id: u32) -> Option<&Distrito> {
        self.distritos.iter().find(|d| d.id == id)
    }
}

pub type Db = Arc<Localidades>;

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/api/v1/localidades/estados/{uf}", get(get_estado))
        .route("/api/v1/localidades/distritos/{id}", get(get_distrito))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_estado(
    State(db): State<Db>,
    Path(uf): Path<String>,
) -> Result<Json<Estado>, StatusCode> {
    db.estado(&uf).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn get_distrito(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Distrito>, StatusCode> {
    db.distrito(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// IBGE region codes.
const REGIOES: [(u32, &str, &str); 5] = [
    (1, "N", "Norte"),
    (2, "NE", "Nordeste"),
    (3, "SE", "Sudeste"),
    (4, "S", "Sul"),
    (5, "CO", "Centro-Oeste"),
];

/// The 27 federative units: (IBGE code, sigla, nome, index into REGIOES).
const ESTADOS: [(u32, &str, &str, usize); 27] = [
    (11, "RO", "Rondônia", 0),
    (12, "AC", "Acre", 0),
    (13, "AM", "Amazonas", 0),
    (14, "RR", "Roraima", 0),
    (15, "PA", "Pará", 0),
    (16, "AP", "Amapá", 0),
    (17, "TO", "Tocantins", 0),
    (21, "MA", "Maranhão", 1),
    (22, "PI", "Piauí", 1),
    (23, "CE", "Ceará", 1),
    (24, "RN", "Rio Grande do Norte", 1),
    (25, "PB", "Paraíba", 1),
    (26, "PE", "Pernambuco", 1),
    (27, "AL", "Alagoas", 1),
    (28, "SE", "Sergipe", 1),
    (29, "BA", "Bahia", 1),
    (31, "MG", "Minas Gerais", 2),
    (32, "ES", "Espírito Santo", 2),
    (33, "RJ", "Rio de Janeiro", 2),
    (35, "SP", "São Paulo", 2),
    (41, "PR", "Paraná", 3),
    (42, "SC", "Santa Catarina", 3),
    (43, "RS", "Rio Grande do Sul", 3),
    (50, "MS", "Mato Grosso do Sul", 4),
    (51, "MT", "Mato Grosso", 4),
    (52, "GO", "Goiás", 4),
    (53, "DF", "Distrito Federal", 4),
];

/// A few real districts: (district code, nome, municipality code,
/// municipality nome). District codes are the 7-digit municipality code
/// plus a 2-digit suffix.
const DISTRITOS: [(u32, &str, u32, &str); 5] = [
    (310010405, "Abadia dos Dourados", 3100104, "Abadia dos Dourados"),
    (330455705, "Rio de Janeiro", 3304557, "Rio de Janeiro"),
    (355030805, "São Paulo", 3550308, "São Paulo"),
    (520005005, "Abadia de Goiás", 5200050, "Abadia de Goiás"),
    (520010005, "Abadiânia", 5200100, "Abadiânia"),
];

/// Build the seeded directory.
pub fn seed() -> Localidades {
    let regioes: Vec<Regiao> = REGIOES
        .iter()
        .map(|&(id, sigla, nome)| Regiao {
            id,
            sigla: sigla.to_string(),
            nome: nome.to_string(),
        })
        .collect();

    let estados = ESTADOS
        .iter()
        .map(|&(id, sigla, nome, regiao)| Estado {
            id,
            sigla: sigla.to_string(),
            nome: nome.to_string(),
            regiao: regioes[regiao].clone(),
        })
        .collect();

    let distritos = DISTRITOS
        .iter()
        .map(|&(id, nome, municipio_id, municipio_nome)| Distrito {
            id,
            nome: nome.to_string(),
            municipio: Municipio {
                id: municipio_id,
                nome: municipio_nome.to_string(),
            },
        })
        .collect();

    Localidades { estados, distritos }
}
