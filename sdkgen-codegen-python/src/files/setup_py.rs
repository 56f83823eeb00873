//! setup.py generator.

use sdkgen_codegen::builder::CodeBuilder;
use sdkgen_core::SourceFile;
use sdkgen_ir::PackageMeta;

use super::{HEADER, py_str};
use crate::PythonSettings;

/// The setuptools entry point.
pub struct SetupPy<'a> {
    pub meta: &'a PackageMeta,
    pub settings: &'a PythonSettings,
}

impl SourceFile for SetupPy<'_> {
    fn path(&self) -> String {
        "setup.py".to_string()
    }

    fn render(&self) -> String {
        let meta = self.meta;
        let pkg = &self.settings.package_name;
        let fallback = format!("{} Pulumi Package - Development Version", meta.name);
        // Keyword arguments align under `setup(`
        let arg = "      ";

        let mut args = vec![
            format!("python_requires={},", py_str(&self.settings.python_requires)),
            "version=VERSION,".to_string(),
        ];
        if let Some(description) = &meta.description {
            args.push(format!("description={},", py_str(description)));
        }
        args.push("long_description=readme(),".to_string());
        args.push("long_description_content_type=\"text/markdown\",".to_string());
        if !meta.keywords.is_empty() {
            args.push(format!("keywords={},", py_str(&meta.keywords.join(" "))));
        }
        if let Some(homepage) = &meta.homepage {
            args.push(format!("url={},", py_str(homepage)));
        }
        if let Some(repository) = &meta.repository {
            args.push(format!(
                "project_urls={{\"Repository\": {}}},",
                py_str(repository)
            ));
        }
        if let Some(license) = &meta.license {
            args.push(format!("license={},", py_str(license)));
        }
        args.push("packages=find_packages(),".to_string());

        CodeBuilder::python()
            .raw(HEADER)
            .blank()
            .line("from setuptools import find_packages, setup")
            .blank()
            .line(&format!("VERSION = {}", py_str(&meta.version)))
            .blank()
            .blank()
            .block("def readme():", |b| {
                b.block("try:", |b| {
                    b.block("with open(\"README.md\", encoding=\"utf-8\") as f:", |b| {
                        b.line("return f.read()")
                    })
                })
                .block("except FileNotFoundError:", |b| {
                    b.line(&format!("return {}", py_str(&fallback)))
                })
            })
            .blank()
            .blank()
            .line(&format!("setup(name={},", py_str(pkg)))
            .each(&args, |b, a| b.line(&format!("{}{}", arg, a)))
            .line(&format!("{}package_data={{", arg))
            .line(&format!("{}    {}: [", arg, py_str(pkg)))
            .line(&format!("{}        \"py.typed\",", arg))
            .line(&format!("{}        \"pulumi-plugin.json\",", arg))
            .line(&format!("{}    ]", arg))
            .line(&format!("{}}},", arg))
            .line(&format!("{}install_requires=[", arg))
            .each(self.settings.requires.iter(), |b, (name, specifier)| {
                b.line(&format!("{}    {},", arg, py_str(&format!("{}{}", name, specifier))))
            })
            .line(&format!("{}],", arg))
            .line(&format!("{}zip_safe=False)", arg))
            .build()
    }
}
