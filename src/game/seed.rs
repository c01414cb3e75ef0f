//! Room definitions as JSON seed data.
//!
//! A room ships as one JSON document listing its hints, riddles, and easter
//! eggs plus the scan-code map. Operators can re-theme a room by editing the
//! seed file; nothing needs recompiling.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::errors::GameError;

/// One room definition as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub hints: Vec<HintSeed>,
    #[serde(default)]
    pub riddles: Vec<RiddleSeed>,
    #[serde(default)]
    pub easter_eggs: Vec<EasterEggSeed>,
    /// scan code -> content id. Several codes may point at the same id.
    #[serde(default)]
    pub scan_codes: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintSeed {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiddleSeed {
    pub id: String,
    pub title: String,
    pub content: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EasterEggSeed {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Load a room definition from a JSON file.
pub fn load_catalog_seed<P: AsRef<Path>>(path: P) -> Result<CatalogSeed, GameError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| GameError::Seed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write a room definition as pretty JSON. `init` uses this to hand the
/// operator an editable copy of the built-in room.
pub fn write_catalog_seed<P: AsRef<Path>>(path: P, seed: &CatalogSeed) -> Result<(), GameError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(seed)?;
    fs::write(path, contents)?;
    Ok(())
}

/// The room this crate ships with: three hints, three riddles, and four
/// easter eggs, written in Spanish for the original venue. Scan codes follow
/// the printed signage (`pista*`, `acertijo*`, `huevo*`).
pub fn canonical_room_seed() -> CatalogSeed {
    let hints = vec![
        HintSeed {
            id: "hint-1".to_string(),
            title: "El Primer Paso".to_string(),
            content: "Todo gran escape comienza con un paso pequeño. Busca debajo de aquello \
                      que todos pisan pero nadie mira: la alfombra de la entrada guarda algo \
                      más que polvo."
                .to_string(),
        },
        HintSeed {
            id: "hint-2".to_string(),
            title: "Los Números Hablan".to_string(),
            content: "Cuatro cifras abren el candado de la vitrina. El año en que todo empezó \
                      está escrito en la fotografía que cuelga torcida."
                .to_string(),
        },
        HintSeed {
            id: "hint-3".to_string(),
            title: "Reflejo de la Verdad".to_string(),
            content: "Lo que buscas está frente a ti, pero solo el espejo del fondo te lo \
                      mostrará. Acércate y lee el mensaje al revés."
                .to_string(),
        },
    ];

    let riddles = vec![
        RiddleSeed {
            id: "riddle-1".to_string(),
            title: "El Enigma del Tiempo".to_string(),
            content: "Tengo agujas y no sé coser, doy vueltas sin caminar y mido lo que no \
                      puedes ver. ¿Qué soy?"
                .to_string(),
            answer: "reloj".to_string(),
        },
        RiddleSeed {
            id: "riddle-2".to_string(),
            title: "La Habitación Secreta".to_string(),
            content: "Me miras y te miro, levantas la mano y te imito, y detrás de mí se \
                      esconde la puerta que buscas. ¿Qué soy?"
                .to_string(),
            answer: "espejo".to_string(),
        },
        RiddleSeed {
            id: "riddle-3".to_string(),
            title: "El Código del Futuro".to_string(),
            content: "Solo conozco dos cifras y sin embargo escribo todo lo que existe: con \
                      unos y ceros guardo el secreto final. ¿Qué lenguaje soy?"
                .to_string(),
            answer: "binario".to_string(),
        },
    ];

    let easter_eggs = vec![
        EasterEggSeed {
            id: "egg-1".to_string(),
            title: "El Desarrollador Secreto".to_string(),
            content: "Has encontrado la firma oculta de quien construyó esta sala. Los \
                      mejores secretos siempre se esconden en el código, y acabas de leer uno."
                .to_string(),
        },
        EasterEggSeed {
            id: "egg-2".to_string(),
            title: "El Gato de Schrödinger".to_string(),
            content: "Dentro de esta caja el gato estaba vivo y muerto a la vez. Al escanear \
                      el código decidiste su destino: hoy le toca ronronear."
                .to_string(),
        },
        EasterEggSeed {
            id: "egg-3".to_string(),
            title: "La Fórmula de la Diversión".to_string(),
            content: "Un estudio muy serio lo confirma: diversión = amigos x enigmas al \
                      cuadrado. Enhorabuena, acabas de subir la media del laboratorio."
                .to_string(),
        },
        EasterEggSeed {
            id: "egg-4".to_string(),
            title: "El Mensaje del Futuro".to_string(),
            content: "Saludos desde el año 2124. Podemos confirmar que lograste escapar, \
                      pero las normas temporales nos prohíben contarte cómo. Sin presión."
                .to_string(),
        },
    ];

    let mut scan_codes = HashMap::new();
    scan_codes.insert("pista1".to_string(), "hint-1".to_string());
    scan_codes.insert("pista2".to_string(), "hint-2".to_string());
    scan_codes.insert("pista3".to_string(), "hint-3".to_string());
    scan_codes.insert("acertijo1".to_string(), "riddle-1".to_string());
    scan_codes.insert("acertijo2".to_string(), "riddle-2".to_string());
    scan_codes.insert("acertijo3".to_string(), "riddle-3".to_string());
    scan_codes.insert("huevo1".to_string(), "egg-1".to_string());
    scan_codes.insert("huevo2".to_string(), "egg-2".to_string());
    scan_codes.insert("huevo3".to_string(), "egg-3".to_string());
    scan_codes.insert("huevo4".to_string(), "egg-4".to_string());

    CatalogSeed {
        hints,
        riddles,
        easter_eggs,
        scan_codes,
    }
}
