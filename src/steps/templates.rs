//! Static file contents written into a new module

/// Placeholder replaced by the package name
pub const PACKAGE_PLACEHOLDER: &str = "<package>";

pub const README_TEMPLATE: &str =
    "# <package>\n[![NPM](https://nodei.co/npm/<package>.png)](https://nodei.co/npm/<package>/)\n";

pub const GITIGNORE: &str = "node_modules\n";

pub const TEST_TEMPLATE: &str = "var test = require('tape')\n\n\
test('dummy test', function (t) {\n  t.end()\n})";

pub fn render_readme(name: &str) -> String {
    README_TEMPLATE.replace(PACKAGE_PLACEHOLDER, name)
}
