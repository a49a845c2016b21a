use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use ocr::tesseract::TesseractRecognizer;
use persistence::scan_history::repository::ScanHistoryRepositorySqlite;
use persistence::settings::repository::SettingsRepositorySqlite;
use persistence::shopping_list::repository::ShoppingListRepositorySqlite;
use persistence::store::KeyValueStore;

use business::application::scan::capture::CaptureScanUseCaseImpl;
use business::application::scan::get_history::GetScanHistoryUseCaseImpl;
use business::application::scan::languages::{ListLanguagesUseCaseImpl, SetLanguagesUseCaseImpl};
use business::application::settings::clear_all_data::ClearAllDataUseCaseImpl;
use business::application::settings::get::GetSettingsUseCaseImpl;
use business::application::settings::save::SaveSettingsUseCaseImpl;
use business::application::shopping_list::add_item::AddItemUseCaseImpl;
use business::application::shopping_list::clear::ClearShoppingListUseCaseImpl;
use business::application::shopping_list::create::CreateShoppingListUseCaseImpl;
use business::application::shopping_list::delete::DeleteShoppingListUseCaseImpl;
use business::application::shopping_list::duplicate::DuplicateShoppingListUseCaseImpl;
use business::application::shopping_list::export::ExportShoppingListUseCaseImpl;
use business::application::shopping_list::get_all::GetAllShoppingListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetShoppingListByIdUseCaseImpl;
use business::application::shopping_list::mutation::ListMutator;
use business::application::shopping_list::remove_item::RemoveItemUseCaseImpl;
use business::application::shopping_list::search::SearchShoppingListsUseCaseImpl;
use business::application::shopping_list::set_item_quantity::SetItemQuantityUseCaseImpl;
use business::application::shopping_list::stats::GetListStatsUseCaseImpl;
use business::application::shopping_list::summary::GetListsSummaryUseCaseImpl;
use business::application::shopping_list::update_item::UpdateItemUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::scan::services::TextRecognizer;

use crate::api::shopping_list::routes::ShoppingListUseCases;
use crate::config::ocr_config::OcrConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
    pub scan_api: crate::api::scan::routes::ScanApi,
    pub settings_api: crate::api::settings::routes::SettingsApi,
    /// Kept so the engine can be shut down once the server stops.
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, ocr_config: OcrConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let store = KeyValueStore::new(pool);
        let shopping_list_repository = Arc::new(ShoppingListRepositorySqlite::new(store.clone()));
        let scan_history_repository = Arc::new(ScanHistoryRepositorySqlite::new(store.clone()));
        let settings_repository = Arc::new(SettingsRepositorySqlite::new(store.clone()));
        let storage = Arc::new(store);

        let recognizer: Arc<dyn TextRecognizer> =
            Arc::new(TesseractRecognizer::new(ocr_config.binary, ocr_config.languages));
        if let Err(err) = recognizer.initialize().await {
            logger.warn(&format!(
                "Text recognizer not available yet ({}); scans will retry",
                err
            ));
        }

        // Shopping list use cases share one writer lock
        let mutator = Arc::new(ListMutator::new(shopping_list_repository.clone()));
        let shopping_list_use_cases = ShoppingListUseCases {
            create: Arc::new(CreateShoppingListUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            get_all: Arc::new(GetAllShoppingListsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetShoppingListByIdUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteShoppingListUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            add_item: Arc::new(AddItemUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            update_item: Arc::new(UpdateItemUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            set_item_quantity: Arc::new(SetItemQuantityUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            remove_item: Arc::new(RemoveItemUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            clear: Arc::new(ClearShoppingListUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            duplicate: Arc::new(DuplicateShoppingListUseCaseImpl {
                mutator: mutator.clone(),
                logger: logger.clone(),
            }),
            search: Arc::new(SearchShoppingListsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            export: Arc::new(ExportShoppingListUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            stats: Arc::new(GetListStatsUseCaseImpl {
                repository: shopping_list_repository.clone(),
                logger: logger.clone(),
            }),
            summary: Arc::new(GetListsSummaryUseCaseImpl {
                repository: shopping_list_repository,
                logger: logger.clone(),
            }),
        };

        // Scan use cases share one history lock with clear-all
        let history_lock = Arc::new(Mutex::new(()));
        let capture_use_case = Arc::new(CaptureScanUseCaseImpl {
            recognizer: recognizer.clone(),
            repository: scan_history_repository.clone(),
            logger: logger.clone(),
            history_lock: history_lock.clone(),
        });
        let get_history_use_case = Arc::new(GetScanHistoryUseCaseImpl {
            repository: scan_history_repository,
            logger: logger.clone(),
        });
        let list_languages_use_case = Arc::new(ListLanguagesUseCaseImpl {
            recognizer: recognizer.clone(),
            logger: logger.clone(),
        });
        let set_languages_use_case = Arc::new(SetLanguagesUseCaseImpl {
            recognizer: recognizer.clone(),
            logger: logger.clone(),
        });

        // Settings use cases
        let get_settings_use_case = Arc::new(GetSettingsUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let save_settings_use_case = Arc::new(SaveSettingsUseCaseImpl {
            repository: settings_repository,
            logger: logger.clone(),
        });
        let clear_all_data_use_case = Arc::new(ClearAllDataUseCaseImpl {
            storage,
            mutator,
            history_lock,
            logger,
        });

        let shopping_list_api =
            crate::api::shopping_list::routes::ShoppingListApi::new(shopping_list_use_cases);

        let scan_api = crate::api::scan::routes::ScanApi::new(
            capture_use_case,
            get_history_use_case,
            list_languages_use_case,
            set_languages_use_case,
        );

        let settings_api = crate::api::settings::routes::SettingsApi::new(
            get_settings_use_case,
            save_settings_use_case,
            clear_all_data_use_case,
        );

        Ok(Self {
            health_api,
            shopping_list_api,
            scan_api,
            settings_api,
            recognizer,
        })
    }
}
