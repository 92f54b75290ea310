use onehotgrad::{
    instantiate_layers, Error, Layer, LayerParameter, LayerRegistry, Mode, NetParameter, Onehot,
    Tensor,
};
use std::sync::Arc;

fn onehot_from_description(num_output: i64) -> Box<dyn Layer> {
    let net = NetParameter::from_json_str(&format!(
        r#"{{"name": "net", "layer": [{{"name": "encode", "type": "Onehot", "onehot_param": {{"num_output": {}}}}}]}}"#,
        num_output
    ))
    .unwrap();
    let mut layers = instantiate_layers(&net, &LayerRegistry::default()).unwrap();
    layers.remove(0).1
}

#[test]
fn encodes_indices_into_trailing_axis() {
    let layer = onehot_from_description(4);
    let input = Tensor::new(vec![0.0, 2.0, 3.0]);

    let mut output = Tensor::default();
    layer.forward(Mode::Cpu, &input, &mut output).unwrap();

    assert_eq!(output.shape, vec![3, 4]);
    assert_eq!(
        output.data,
        vec![
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
        ]
    );
}

#[test]
fn single_class_layer() {
    let layer = onehot_from_description(1);

    let mut output = Tensor::default();
    layer
        .forward(Mode::Cpu, &Tensor::new(vec![0.0]), &mut output)
        .unwrap();

    assert_eq!(output.shape, vec![1, 1]);
    assert_eq!(output.data, vec![1.0]);
}

#[test]
fn reused_output_buffer_follows_input_shape() {
    let layer = onehot_from_description(3);
    let mut output = Tensor::default();

    layer
        .forward(Mode::Cpu, &Tensor::new(vec![0.0, 1.0, 2.0, 1.0]), &mut output)
        .unwrap();
    assert_eq!(output.shape, vec![4, 3]);

    let input = Tensor::new_with_shape(vec![2.0, 0.0], vec![1, 2]);
    layer.forward(Mode::Cpu, &input, &mut output).unwrap();
    assert_eq!(output.shape, vec![1, 2, 3]);
    assert_eq!(output.data, vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn zero_width_is_rejected_at_creation() {
    let net = NetParameter::from_toml_str(
        r#"
        [[layer]]
        name = "encode"
        type = "Onehot"
        onehot_param = { num_output = 0 }
        "#,
    )
    .unwrap();

    let err = instantiate_layers(&net, &LayerRegistry::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert!(err.to_string().contains("num_output must be positive"));
}

#[test]
fn backward_always_fails() {
    for num_output in 1..8 {
        let layer = onehot_from_description(num_output);
        let top_grad = Tensor::zeros(vec![2, num_output as usize]);
        let mut bottom_grad = Tensor::zeros(vec![2]);

        let err = layer
            .backward(Mode::Cpu, &top_grad, true, &mut bottom_grad)
            .unwrap_err();
        assert_eq!(err.to_string(), "can't backpropagate to Onehot layer input");
    }
}

#[test]
fn shared_layer_across_threads() {
    let param = LayerParameter::new("encode", "Onehot").with_onehot_param(5);
    let layer = Arc::new(Onehot::configure(&param).unwrap());

    std::thread::scope(|scope| {
        for index in 0..5 {
            let layer = Arc::clone(&layer);
            scope.spawn(move || {
                let output = layer.encode(&Tensor::new(vec![index as f32; 3])).unwrap();
                for row in output.rows() {
                    assert_eq!(row.iter().position(|&v| v == 1.0), Some(index));
                    assert_eq!(row.iter().sum::<f32>(), 1.0);
                }
            });
        }
    });
}

#[test]
fn invalid_input_reports_position() {
    let layer = onehot_from_description(10);
    let mut output = Tensor::default();

    let err = layer
        .forward(Mode::Cpu, &Tensor::new(vec![1.0, 9.0, 10.0]), &mut output)
        .unwrap_err();
    assert_eq!(err.to_string(), "input 10 at position 2 is outside [0, 10)");
}
