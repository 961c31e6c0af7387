use std::collections::VecDeque;

use crate::{Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, String> {
        self.repository.read_settings().await
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::Mutex};

    use ::log::Level;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::log::Service as _;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        settings: RefCell<Option<Settings>>,
    }

    impl SettingsRepository for FakeRepository {
        async fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.settings.borrow().clone().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.borrow_mut() = Some(settings);
            Ok(())
        }
    }

    struct FakeLog(Mutex<VecDeque<log::Entry>>);

    impl log::Repository for FakeLog {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.0.lock().unwrap().push_front(entry);
            Ok(())
        }
    }

    #[test]
    fn test_settings() {
        let service = Service::new(FakeRepository::default());

        assert_eq!(
            block_on(service.get_settings()).unwrap(),
            Settings::default()
        );

        let settings = Settings {
            default_frequency: 3,
            ..Settings::default()
        };
        block_on(service.set_settings(settings.clone())).unwrap();

        assert_eq!(block_on(service.get_settings()).unwrap(), settings);
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(FakeLog(Mutex::new(VecDeque::new())));
        let entry = log::Entry {
            time: String::from("Jan 02 10:00:00"),
            level: Level::Error,
            message: String::from("failed to save program"),
        };

        service.add_log_entry(entry.clone()).unwrap();

        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}
