use driver::database::Catalog;
use kernel::interface::clock::Clock;
use vodca::References;

#[derive(References)]
pub struct Handler {
    catalog: Catalog,
    clock: Box<dyn Clock>,
}

impl Handler {
    pub fn init(clock: impl Clock) -> Self {
        Self {
            catalog: Catalog::new(),
            clock: Box::new(clock),
        }
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}
