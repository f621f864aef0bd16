use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки зала
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    /// Сколько случайных демо-бронирований сделать на старте.
    pub demo_bookings: usize,
    /// Фиксированный seed генератора - для воспроизводимых демо и тестов.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_booking=debug,tower_http=debug".to_string()),
            },
            hall: HallConfig {
                demo_bookings: env::var("DEMO_BOOKINGS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("DEMO_BOOKINGS must be a valid number"),
                rng_seed: env::var("RNG_SEED").ok().map(|s| {
                    s.parse().expect("RNG_SEED must be a valid number")
                }),
            },
        }
    }
}
