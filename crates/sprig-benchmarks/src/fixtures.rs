//! Synthetic module registries for benchmarks

use sprig_core::Module;
use sprig_registry::MemoryRegistry;

/// Linear chain: module{i} requires module{i-1}. Returns the registry and the
/// name of the deepest module.
pub fn chain_registry(length: usize) -> (MemoryRegistry, String) {
    assert!(length > 0, "chain needs at least one module");

    let registry = MemoryRegistry::new();
    registry.insert(Module::new(module_name(0)));
    for i in 1..length {
        registry.insert(Module::with_requires(
            module_name(i),
            vec![module_name(i - 1)],
        ));
    }

    (registry, module_name(length - 1))
}

/// Diamond: one root requiring `width` middle modules, each of which requires
/// the same shared base. Returns the registry and the root name.
pub fn diamond_registry(width: usize) -> (MemoryRegistry, String) {
    let registry = MemoryRegistry::new();
    registry.insert(Module::new("base".to_string()));

    let mut requires = Vec::with_capacity(width);
    for i in 0..width {
        let name = format!("mid{i}");
        registry.insert(Module::with_requires(
            name.clone(),
            vec!["base".to_string()],
        ));
        requires.push(name);
    }
    registry.insert(Module::with_requires("root".to_string(), requires));

    (registry, "root".to_string())
}

fn module_name(i: usize) -> String {
    format!("module{i}")
}
