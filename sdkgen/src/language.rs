//! Backend registration.

use sdkgen_codegen::language::Dispatcher;
use sdkgen_codegen_dotnet::Generator as DotNetGenerator;
use sdkgen_codegen_go::Generator as GoGenerator;
use sdkgen_codegen_nodejs::Generator as NodeJsGenerator;
use sdkgen_codegen_python::Generator as PythonGenerator;

/// A dispatcher with every built-in backend registered.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new()
        .register(GoGenerator)
        .register(NodeJsGenerator)
        .register(PythonGenerator)
        .register(DotNetGenerator)
}

#[cfg(test)]
mod tests {
    use sdkgen_schema::Language;

    use super::*;

    #[test]
    fn test_every_language_is_registered() {
        let languages: Vec<_> = dispatcher().languages().collect();
        assert_eq!(languages, Language::ALL.to_vec());
    }
}
