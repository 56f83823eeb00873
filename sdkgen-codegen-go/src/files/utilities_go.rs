//! internal/pulumiUtilities.go generator.

use sdkgen_core::SourceFile;

use super::{HEADER, PULUMI_SDK};

/// Package-level helpers shared by every resource: the SDK version and the
/// default resource options.
pub struct UtilitiesGo {
    pub package_name: String,
    /// Schema package name, as used in the provider plugin name.
    pub plugin: String,
    pub version: String,
}

const TEMPLATE: &str = r#"package internal

import (
	"fmt"
	"os"
	"reflect"
	"regexp"
	"strconv"
	"strings"

	"github.com/blang/semver"
	"{{PULUMI_SDK}}"
)

// SdkVersion is the version of this package, set at generation time.
var SdkVersion semver.Version = semver.MustParse("{{VERSION}}")

type envParser func(v string) interface{}

func ParseEnvBool(v string) interface{} {
	b, err := strconv.ParseBool(v)
	if err != nil {
		return nil
	}
	return b
}

func ParseEnvFloat(v string) interface{} {
	f, err := strconv.ParseFloat(v, 64)
	if err != nil {
		return nil
	}
	return f
}

func ParseEnvStringArray(v string) interface{} {
	var result pulumi.StringArray
	for _, item := range strings.Split(v, ";") {
		result = append(result, pulumi.String(item))
	}
	return result
}

func GetEnvOrDefault(def interface{}, parser envParser, vars ...string) interface{} {
	for _, v := range vars {
		if value, ok := os.LookupEnv(v); ok {
			if parser != nil {
				return parser(value)
			}
			return value
		}
	}
	return def
}

// PkgVersion returns the version of this package. When no version was set
// at generation time it is derived from the module path, defaulting to v1.
func PkgVersion() (semver.Version, error) {
	if !SdkVersion.Equals(semver.Version{}) {
		return SdkVersion, nil
	}
	type sentinel struct{}
	pkgPath := reflect.TypeOf(sentinel{}).PkgPath()
	re := regexp.MustCompile("^.*/pulumi-{{PLUGIN}}/sdk(/v\\d+)?")
	if match := re.FindStringSubmatch(pkgPath); match != nil {
		vStr := match[1]
		if len(vStr) == 0 {
			return semver.Version{Major: 1}, nil
		}
		return semver.MustParse(fmt.Sprintf("%s.0.0", vStr[2:])), nil
	}
	return semver.Version{Major: 1}, nil
}

// PkgResourceDefaultOpts prepends package level defaults to opts.
func PkgResourceDefaultOpts(opts []pulumi.ResourceOption) []pulumi.ResourceOption {
	defaults := []pulumi.ResourceOption{}
	version := SdkVersion
	if !version.Equals(semver.Version{}) {
		defaults = append(defaults, pulumi.Version(version.String()))
	}
	return append(defaults, opts...)
}
"#;

impl SourceFile for UtilitiesGo {
    fn path(&self) -> String {
        format!("{}/internal/pulumiUtilities.go", self.package_name)
    }

    fn render(&self) -> String {
        let body = TEMPLATE
            .replace("{{PULUMI_SDK}}", PULUMI_SDK)
            .replace("{{VERSION}}", &self.version)
            .replace("{{PLUGIN}}", &self.plugin);
        format!("{}\n{}", HEADER, body)
    }
}
