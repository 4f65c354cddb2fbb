use crate::handles::ModelHash;

/// Native table for the model streaming system.
///
/// Requesting a model is asynchronous engine-side: `request_model` queues
/// the load and `has_model_loaded` reports completion on a later tick.
pub trait StreamingNatives {
    fn request_model(&self, model: ModelHash);
    fn has_model_loaded(&self, model: ModelHash) -> i32;
    fn is_model_in_cdimage(&self, model: ModelHash) -> i32;
    fn is_model_valid(&self, model: ModelHash) -> i32;
    fn is_model_a_ped(&self, model: ModelHash) -> i32;
    fn is_model_a_vehicle(&self, model: ModelHash) -> i32;
    fn set_model_as_no_longer_needed(&self, model: ModelHash);
}
