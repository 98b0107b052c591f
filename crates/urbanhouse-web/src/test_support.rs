use std::sync::Arc;

use urbanhouse_core::ListingStore;

use crate::config::ServerConfig;
use crate::state::AppState;

pub const LISTINGS: &str = r#"{
    "propiedades": [
        { "id": 1, "titulo": "Ático de Lujo en Palermo", "precio": "450.000", "tipo": "Venta",
          "ubicacion": "Palermo, Buenos Aires", "caracteristicas": "3 amb. | 120m² | 2 baños",
          "descripcion": "Terraza privada" },
        { "id": 2, "titulo": "Departamento Moderno", "precio": "180.000", "tipo": "Alquiler",
          "ubicacion": "Belgrano, Buenos Aires", "caracteristicas": "2 amb. | 75m² | 1 baño",
          "descripcion": "Totalmente renovado" },
        { "id": 3, "titulo": "Casa Familiar", "precio": "320.000", "tipo": "Venta",
          "ubicacion": "Vicente López, GBA", "caracteristicas": "4 amb. | 200m² | 3 baños",
          "descripcion": "Jardín y piscina" },
        { "id": 4, "titulo": "Casa Quinta", "precio": "Consultar", "tipo": "Venta",
          "ubicacion": "Pilar, GBA", "caracteristicas": "6 amb.",
          "descripcion": "Barrio cerrado" }
    ],
    "featured": [3, 1]
}"#;

pub fn state() -> AppState {
    state_with(ServerConfig::default())
}

pub fn state_with(config: ServerConfig) -> AppState {
    AppState {
        config: Arc::new(config),
        store: ListingStore::from_json_str(LISTINGS).unwrap(),
    }
}
