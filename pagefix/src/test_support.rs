//! Test-only fixtures: generated page bodies and filesystem helpers.

use std::fs;
use std::path::Path;

/// A generated page carrying both defects: a doubled opening wrapper and a
/// `</div>` closing the wrapper.
pub const BROKEN_PAGE: &str = r#""use client";

import { LayoutWrapper } from "@/components/layout-wrapper";

export default function CadastrarProdutoPage() {
  return (
    <LayoutWrapper>
      <LayoutWrapper>
      <main className="container mx-auto px-4 py-8">
        <div className="mb-8">
          <h1 className="text-3xl font-bold mb-2">Cadastrar Produto</h1>
        </div>
      </main>
    </div>
  );
}
"#;

/// `BROKEN_PAGE` after both repairs.
pub const FIXED_PAGE: &str = r#""use client";

import { LayoutWrapper } from "@/components/layout-wrapper";

export default function CadastrarProdutoPage() {
  return (
    <LayoutWrapper>
      <main className="container mx-auto px-4 py-8">
        <div className="mb-8">
          <h1 className="text-3xl font-bold mb-2">Cadastrar Produto</h1>
        </div>
      </main>
    </LayoutWrapper>
  );
}
"#;

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// Read `path` as raw bytes.
pub fn read_bytes(path: &Path) -> Vec<u8> {
    fs::read(path).expect("read fixture file")
}
