//! Custom actions sorted into per-kind buckets.
//!
//! Installer listeners are built from their registered name through
//! [`ListenerFactories`]; the uninstaller-side actions are stored as
//! declared and handed to the uninstaller writer later.

use crate::error::{Error, ListenerError, Result};
use packwright_model::{CustomAction, CustomActionDescriptor, CustomActionRecord, Pack};
use packwright_platform::Platform;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// Listener notified around pack installation.
pub trait InstallerListener: Send + Sync {
    /// Name for logging and error reporting.
    fn name(&self) -> &'static str;

    fn before_packs(&self, _packs: &[Pack]) -> std::result::Result<(), ListenerError> { Ok(()) }

    fn after_packs(&self, _packs: &[Pack]) -> std::result::Result<(), ListenerError> { Ok(()) }
}

type ListenerFactory =
    Box<dyn Fn() -> std::result::Result<Box<dyn InstallerListener>, ListenerError> + Send + Sync>;

/// Listener constructors keyed by the class name used in `customData`.
#[derive(Default)]
pub struct ListenerFactories {
    factories: BTreeMap<String, ListenerFactory>,
}

impl ListenerFactories {
    pub const fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a fallible constructor.
    pub fn register<F>(mut self, class_name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> std::result::Result<Box<dyn InstallerListener>, ListenerError> + Send + Sync + 'static,
    {
        self.factories.insert(class_name.into(), Box::new(factory));
        self
    }

    /// Register a listener built through its `Default` impl.
    pub fn register_default<L>(self, class_name: impl Into<String>) -> Self
    where
        L: InstallerListener + Default + 'static,
    {
        self.register(class_name, || Ok(Box::new(L::default()) as Box<dyn InstallerListener>))
    }

    pub fn instantiate(&self, class_name: &str) -> Result<Box<dyn InstallerListener>> {
        let factory = self
            .factories
            .get(class_name)
            .ok_or_else(|| Error::ClassResolution {
                class_name: class_name.to_string(),
            })?;
        factory().map_err(|source| Error::Instantiation {
            class_name: class_name.to_string(),
            source,
        })
    }
}

impl fmt::Debug for ListenerFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

#[derive(Default)]
pub struct CustomActionRegistry {
    installer_listeners:   Vec<Box<dyn InstallerListener>>,
    uninstaller_listeners: Vec<CustomActionDescriptor>,
    uninstaller_jars:      Vec<CustomActionDescriptor>,
    uninstaller_libs:      Vec<Vec<u8>>,
}

impl CustomActionRegistry {
    /// Sorts `records` into buckets, keeping declaration order and dropping
    /// records whose constraints exclude `platform`.
    pub fn build<I>(records: I, platform: &Platform, factories: &ListenerFactories) -> Result<Self>
    where
        I: IntoIterator<Item = CustomActionRecord>,
    {
        let mut registry = Self::default();
        for record in records {
            if !record.applies_to(platform) {
                trace!(kind = %record.kind(), "custom action excluded on this platform");
                continue;
            }
            match record.action {
                CustomAction::InstallerListener { class_name } => {
                    let listener = factories.instantiate(&class_name)?;
                    debug!(class_name = %class_name, listener = listener.name(), "installer listener ready");
                    registry.installer_listeners.push(listener);
                }
                CustomAction::UninstallerListener(descriptor) => registry.uninstaller_listeners.push(descriptor),
                CustomAction::UninstallerJar(descriptor) => registry.uninstaller_jars.push(descriptor),
                CustomAction::UninstallerLib { contents } => registry.uninstaller_libs.push(contents),
            }
        }
        Ok(registry)
    }

    pub fn installer_listeners(&self) -> &[Box<dyn InstallerListener>] { &self.installer_listeners }

    pub fn uninstaller_listeners(&self) -> &[CustomActionDescriptor] { &self.uninstaller_listeners }

    pub fn uninstaller_jars(&self) -> &[CustomActionDescriptor] { &self.uninstaller_jars }

    pub fn uninstaller_libs(&self) -> &[Vec<u8>] { &self.uninstaller_libs }

    pub fn is_empty(&self) -> bool {
        self.installer_listeners.is_empty()
            && self.uninstaller_listeners.is_empty()
            && self.uninstaller_jars.is_empty()
            && self.uninstaller_libs.is_empty()
    }
}

impl fmt::Debug for CustomActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: Vec<_> = self.installer_listeners.iter().map(|l| l.name()).collect();
        f.debug_struct("CustomActionRegistry")
            .field("installer_listeners", &listeners)
            .field("uninstaller_listeners", &self.uninstaller_listeners)
            .field("uninstaller_jars", &self.uninstaller_jars)
            .field("uninstaller_libs", &self.uninstaller_libs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packwright_model::OsConstraint;
    use packwright_platform::arch::Arch;
    use packwright_platform::os::Distro;
    use packwright_platform::OS;

    #[derive(Default)]
    struct SummaryLogger;

    impl InstallerListener for SummaryLogger {
        fn name(&self) -> &'static str { "summary_logger" }
    }

    #[derive(Default)]
    struct ShortcutMaker;

    impl InstallerListener for ShortcutMaker {
        fn name(&self) -> &'static str { "shortcut_maker" }
    }

    #[derive(Default)]
    struct SizeCheck;

    impl InstallerListener for SizeCheck {
        fn name(&self) -> &'static str { "size_check" }

        fn before_packs(&self, packs: &[Pack]) -> std::result::Result<(), ListenerError> {
            match packs.iter().find(|p| p.size == 0) {
                Some(pack) => Err(format!("pack '{}' has no size", pack.name).into()),
                None => Ok(()),
            }
        }
    }

    fn linux() -> Platform { Platform::new(OS::Linux(Distro::Ubuntu), Arch::X86_64, "Linux", "6.8") }

    fn factories() -> ListenerFactories {
        ListenerFactories::new()
            .register_default::<SummaryLogger>("SummaryLogger")
            .register_default::<ShortcutMaker>("ShortcutMaker")
            .register("Broken", || Err("missing configuration".into()))
    }

    fn listener(class_name: &str) -> CustomActionRecord {
        CustomActionRecord::new(CustomAction::InstallerListener {
            class_name: class_name.into(),
        })
    }

    fn jar(path: &str) -> CustomActionRecord {
        CustomActionRecord::new(CustomAction::UninstallerJar(CustomActionDescriptor {
            listener_name: None,
            contents:      vec![path.into()],
        }))
    }

    #[test]
    fn test_listeners_keep_declaration_order() {
        let records = vec![listener("ShortcutMaker"), listener("SummaryLogger")];
        let registry = CustomActionRegistry::build(records, &linux(), &factories()).unwrap();
        let names: Vec<_> = registry.installer_listeners().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["shortcut_maker", "summary_logger"]);
    }

    #[test]
    fn test_excluded_records_dropped() {
        let records = vec![
            jar("a.jar"),
            jar("win.jar").constraint(OsConstraint::family("windows")),
            jar("b.jar"),
            listener("Unregistered").constraint(OsConstraint::family("mac")),
        ];
        let registry = CustomActionRegistry::build(records, &linux(), &factories()).unwrap();
        let jars: Vec<_> = registry
            .uninstaller_jars()
            .iter()
            .map(|d| d.contents[0].as_str())
            .collect();
        assert_eq!(jars, vec!["a.jar", "b.jar"]);
        assert!(registry.installer_listeners().is_empty());
    }

    #[test]
    fn test_any_matching_constraint_keeps_record() {
        let record = jar("unix.jar")
            .constraint(OsConstraint::family("windows"))
            .constraint(OsConstraint::family("unix"));
        let registry = CustomActionRegistry::build([record], &linux(), &factories()).unwrap();
        assert_eq!(registry.uninstaller_jars().len(), 1);
    }

    #[test]
    fn test_uninstaller_lib_keeps_bytes_only() {
        let records = vec![CustomActionRecord::new(CustomAction::UninstallerLib {
            contents: vec![0x7f, b'E', b'L', b'F'],
        })];
        let registry = CustomActionRegistry::build(records, &linux(), &factories()).unwrap();
        assert_eq!(registry.uninstaller_libs(), &[vec![0x7f, b'E', b'L', b'F']]);
    }

    #[test]
    fn test_unknown_class_is_fatal() {
        let err = CustomActionRegistry::build([listener("Nope")], &linux(), &factories()).unwrap_err();
        assert!(matches!(err, Error::ClassResolution { class_name } if class_name == "Nope"));
    }

    #[test]
    fn test_factory_failure_is_fatal() {
        let err = CustomActionRegistry::build([listener("Broken")], &linux(), &factories()).unwrap_err();
        match err {
            Error::Instantiation { class_name, source } => {
                assert_eq!(class_name, "Broken");
                assert_eq!(source.to_string(), "missing configuration");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_listener_hooks_see_packs() {
        let factories = factories().register_default::<SizeCheck>("SizeCheck");
        let records = vec![listener("SummaryLogger"), listener("SizeCheck")];
        let registry = CustomActionRegistry::build(records, &linux(), &factories).unwrap();
        let [logger, check] = registry.installer_listeners() else {
            panic!("expected two listeners");
        };

        let mut core = Pack::new("Core");
        core.size = 4096;
        let packs = vec![core, Pack::new("Docs")];

        assert!(logger.before_packs(&packs).is_ok());
        assert!(logger.after_packs(&packs).is_ok());
        let err = check.before_packs(&packs).unwrap_err();
        assert_eq!(err.to_string(), "pack 'Docs' has no size");
        assert!(check.after_packs(&packs).is_ok());
        assert!(check.before_packs(&packs[..1]).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let registry = CustomActionRegistry::build(Vec::new(), &linux(), &ListenerFactories::new()).unwrap();
        assert!(registry.is_empty());
    }
}
