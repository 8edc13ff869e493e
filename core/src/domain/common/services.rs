use crate::domain::recipe::ports::RecipeRepository;

/// Domain services are implemented on this struct, one trait per concern.
#[derive(Clone, Debug)]
pub struct Service<R>
where
    R: RecipeRepository,
{
    pub(crate) recipe_repository: R,
}

impl<R> Service<R>
where
    R: RecipeRepository,
{
    pub fn new(recipe_repository: R) -> Self {
        Self { recipe_repository }
    }
}
